use super::commissions_model::{Commission, NewCommission};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for commission repository operations.
#[async_trait]
pub trait CommissionRepositoryTrait: Send + Sync {
    fn get_commissions(&self) -> Result<Vec<Commission>>;
    fn get_commission(&self, from: &str, to: &str) -> Result<Option<Commission>>;
    async fn upsert_commission(&self, commission: Commission) -> Result<Commission>;
}

/// Trait defining the contract for commission service operations.
#[async_trait]
pub trait CommissionServiceTrait: Send + Sync {
    fn get_commissions(&self) -> Result<Vec<Commission>>;
    fn get_commission(&self, from: &str, to: &str) -> Result<Option<Commission>>;
    fn get_commission_coefficient(&self, from: &str, to: &str) -> Result<Decimal>;
    async fn set_commission(&self, new_commission: NewCommission) -> Result<Commission>;
}
