use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::commissions_errors::CommissionError;
use super::commissions_model::{Commission, NewCommission};
use super::commissions_traits::{CommissionRepositoryTrait, CommissionServiceTrait};
use crate::constants::COEFFICIENT_DECIMAL_PRECISION;
use crate::currency::validate_code;
use crate::errors::Result;
use crate::utils::decimal_utils::round_down;

#[derive(Clone)]
pub struct CommissionService {
    repository: Arc<dyn CommissionRepositoryTrait>,
}

impl CommissionService {
    pub fn new(repository: Arc<dyn CommissionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn validate(new_commission: &NewCommission) -> Result<()> {
        validate_code(&new_commission.from_currency)?;
        validate_code(&new_commission.to_currency)?;

        if new_commission.from_currency == new_commission.to_currency {
            return Err(CommissionError::InvalidCommission(
                "currencies from and to must differ".to_string(),
            )
            .into());
        }
        if new_commission.percent < Decimal::ZERO || new_commission.percent >= Decimal::ONE_HUNDRED
        {
            return Err(CommissionError::InvalidCommission(format!(
                "percent must be in [0, 100), got {}",
                new_commission.percent
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl CommissionServiceTrait for CommissionService {
    fn get_commissions(&self) -> Result<Vec<Commission>> {
        self.repository.get_commissions()
    }

    fn get_commission(&self, from: &str, to: &str) -> Result<Option<Commission>> {
        self.repository.get_commission(from, to)
    }

    /// Multiplicative coefficient `1 - percent/100` for the exact ordered
    /// pair, with `percent/100` truncated to 5 decimal places. A pair with
    /// no commission record yields 1.
    fn get_commission_coefficient(&self, from: &str, to: &str) -> Result<Decimal> {
        let percent = self
            .repository
            .get_commission(from, to)?
            .map(|commission| commission.percent)
            .unwrap_or(Decimal::ZERO);

        let fraction = round_down(
            percent / Decimal::ONE_HUNDRED,
            COEFFICIENT_DECIMAL_PRECISION,
        );
        Ok(Decimal::ONE - fraction)
    }

    async fn set_commission(&self, new_commission: NewCommission) -> Result<Commission> {
        Self::validate(&new_commission)?;

        let now = Utc::now();
        let commission = Commission {
            id: Commission::make_commission_id(
                &new_commission.from_currency,
                &new_commission.to_currency,
            ),
            from_currency: new_commission.from_currency,
            to_currency: new_commission.to_currency,
            percent: new_commission.percent,
            created_at: now,
            updated_at: now,
        };

        let pair = commission.id.clone();
        self.repository
            .upsert_commission(commission)
            .await
            .map_err(|e| {
                log::error!("Failed to save commission {}: {}", pair, e);
                e
            })
    }
}
