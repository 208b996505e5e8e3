//! Rates module - the exchange rate store. Every write keeps the reverse
//! direction of the pair consistent with the forward rate.

mod rates_errors;
mod rates_model;
mod rates_service;
mod rates_traits;

pub use rates_errors::RateError;
pub use rates_model::{ExchangeRate, NewExchangeRate};
pub use rates_service::RateService;
pub use rates_traits::{RateRepositoryTrait, RateServiceTrait};
