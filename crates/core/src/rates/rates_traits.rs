use super::rates_model::{ExchangeRate, NewExchangeRate};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for exchange rate repository operations.
#[async_trait]
pub trait RateRepositoryTrait: Send + Sync {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>>;
    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>>;

    /// Upserts the forward and reverse records of a pair as one atomic unit.
    /// A reader must never observe only one side updated.
    async fn upsert_rate_pair(
        &self,
        forward: ExchangeRate,
        reverse: ExchangeRate,
    ) -> Result<ExchangeRate>;
}

/// Trait defining the contract for exchange rate service operations.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>>;
    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>>;
    async fn set_exchange_rate(&self, new_rate: NewExchangeRate) -> Result<ExchangeRate>;
}
