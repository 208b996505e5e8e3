use std::sync::Arc;

use rust_decimal::Decimal;

use super::exchange_errors::ExchangeError;
use super::exchange_model::{ExchangeRequest, OperationType};
use super::exchange_traits::ExchangeServiceTrait;
use crate::commissions::CommissionServiceTrait;
use crate::constants::AMOUNT_DECIMAL_PRECISION;
use crate::currency::validate_code;
use crate::errors::Result;
use crate::rates::RateRepositoryTrait;
use crate::utils::decimal_utils::{div_down, round_down};

pub struct ExchangeService {
    rate_repository: Arc<dyn RateRepositoryTrait>,
    commission_service: Arc<dyn CommissionServiceTrait>,
}

impl ExchangeService {
    pub fn new(
        rate_repository: Arc<dyn RateRepositoryTrait>,
        commission_service: Arc<dyn CommissionServiceTrait>,
    ) -> Self {
        Self {
            rate_repository,
            commission_service,
        }
    }

    fn require_positive(amount: Option<Decimal>, field: &str, operation: OperationType) -> Result<Decimal> {
        match amount {
            Some(value) if value > Decimal::ZERO => Ok(value),
            Some(value) => Err(ExchangeError::InvalidAmount(format!(
                "for operation {} {} must be greater than zero, got {}",
                operation, field, value
            ))
            .into()),
            None => Err(ExchangeError::InvalidAmount(format!(
                "for operation {} {} is required",
                operation, field
            ))
            .into()),
        }
    }
}

impl ExchangeServiceTrait for ExchangeService {
    fn calculate_exchange(&self, mut request: ExchangeRequest) -> Result<ExchangeRequest> {
        validate_code(&request.currency_from)?;
        validate_code(&request.currency_to)?;

        if request.currency_from == request.currency_to {
            return Err(ExchangeError::UnsupportedPair(format!(
                "currencies from and to must differ, got {}",
                request.currency_from
            ))
            .into());
        }

        let rate = self
            .rate_repository
            .get_exchange_rate(&request.currency_from, &request.currency_to)?
            .ok_or_else(|| {
                ExchangeError::RateNotFound(format!(
                    "no rate for {}/{}",
                    request.currency_from, request.currency_to
                ))
            })?
            .rate;

        let coefficient = self
            .commission_service
            .get_commission_coefficient(&request.currency_from, &request.currency_to)?;

        match request.operation_type {
            OperationType::Give => {
                let amount_from =
                    Self::require_positive(request.amount_from, "amountFrom", request.operation_type)?;
                request.amount_to = Some(round_down(
                    amount_from * rate * coefficient,
                    AMOUNT_DECIMAL_PRECISION,
                ));
            }
            OperationType::Get => {
                let amount_to =
                    Self::require_positive(request.amount_to, "amountTo", request.operation_type)?;
                let divisor = round_down(rate * coefficient, AMOUNT_DECIMAL_PRECISION);
                let amount_from = div_down(amount_to, divisor, AMOUNT_DECIMAL_PRECISION)
                    .filter(|_| divisor > Decimal::ZERO)
                    .ok_or_else(|| {
                        ExchangeError::ConversionFailed(format!(
                            "effective rate for {}/{} truncates to zero",
                            request.currency_from, request.currency_to
                        ))
                    })?;
                request.amount_from = Some(amount_from);
            }
            OperationType::Unknown => {
                return Err(ExchangeError::UnsupportedOperation(
                    request.operation_type.to_string(),
                )
                .into());
            }
        }

        Ok(request)
    }
}
