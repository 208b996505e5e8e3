use super::exchange_model::ExchangeRequest;
use crate::errors::Result;

/// Trait defining the contract for exchange calculation.
pub trait ExchangeServiceTrait: Send + Sync {
    /// Resolves the rate and commission coefficient for the request's pair
    /// and fills in the missing amount. Read-only.
    fn calculate_exchange(&self, request: ExchangeRequest) -> Result<ExchangeRequest>;
}
