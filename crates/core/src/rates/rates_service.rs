use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::rates_errors::RateError;
use super::rates_model::{ExchangeRate, NewExchangeRate};
use super::rates_traits::{RateRepositoryTrait, RateServiceTrait};
use crate::constants::RATE_DECIMAL_PRECISION;
use crate::currency::validate_code;
use crate::errors::Result;
use crate::utils::decimal_utils::div_down;

#[derive(Clone)]
pub struct RateService {
    repository: Arc<dyn RateRepositoryTrait>,
}

impl RateService {
    pub fn new(repository: Arc<dyn RateRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn validate(new_rate: &NewExchangeRate) -> Result<()> {
        validate_code(&new_rate.from_currency)?;
        validate_code(&new_rate.to_currency)?;

        if new_rate.from_currency == new_rate.to_currency {
            return Err(
                RateError::InvalidRate("currencies from and to must differ".to_string()).into(),
            );
        }
        if new_rate.rate <= Decimal::ZERO {
            return Err(RateError::InvalidRate(format!(
                "rate must be greater than zero, got {}",
                new_rate.rate
            ))
            .into());
        }
        Ok(())
    }

    /// Reverse rate of the pair: `1 / rate` truncated to 5 decimal places.
    fn reverse_rate(rate: Decimal) -> Result<Decimal> {
        let reverse = div_down(Decimal::ONE, rate, RATE_DECIMAL_PRECISION)
            .ok_or_else(|| RateError::InvalidRate(format!("cannot invert rate {}", rate)))?;

        // A rate of 100000 or more truncates to a zero reverse, which would
        // break the pair invariant the moment the reverse direction is used.
        if reverse <= Decimal::ZERO {
            return Err(RateError::InvalidRate(format!(
                "rate {} has no representable reverse at {} decimal places",
                rate, RATE_DECIMAL_PRECISION
            ))
            .into());
        }
        Ok(reverse)
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        self.repository.get_exchange_rates()
    }

    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>> {
        self.repository.get_exchange_rate(from, to)
    }

    /// Upserts the forward record and its derived reverse record atomically,
    /// so that for every pair ever set both directions exist and satisfy
    /// `rate(A,B) * rate(B,A) ~= 1` within truncation error.
    async fn set_exchange_rate(&self, new_rate: NewExchangeRate) -> Result<ExchangeRate> {
        Self::validate(&new_rate)?;

        let reverse_rate = Self::reverse_rate(new_rate.rate)?;
        let now = Utc::now();

        let forward = ExchangeRate {
            id: ExchangeRate::make_rate_id(&new_rate.from_currency, &new_rate.to_currency),
            from_currency: new_rate.from_currency.clone(),
            to_currency: new_rate.to_currency.clone(),
            rate: new_rate.rate,
            created_at: now,
            updated_at: now,
        };
        let reverse = ExchangeRate {
            id: ExchangeRate::make_rate_id(&new_rate.to_currency, &new_rate.from_currency),
            from_currency: new_rate.to_currency,
            to_currency: new_rate.from_currency,
            rate: reverse_rate,
            created_at: now,
            updated_at: now,
        };

        let pair = forward.id.clone();
        self.repository
            .upsert_rate_pair(forward, reverse)
            .await
            .map_err(|e| {
                log::error!("Failed to save exchange rate {}: {}", pair, e);
                e
            })
    }
}
