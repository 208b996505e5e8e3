//! Commissions module - per-pair commission records and the coefficient
//! calculator applied to exchange quotes.

mod commissions_errors;
mod commissions_model;
mod commissions_service;
mod commissions_traits;

pub use commissions_errors::CommissionError;
pub use commissions_model::{Commission, NewCommission};
pub use commissions_service::CommissionService;
pub use commissions_traits::{CommissionRepositoryTrait, CommissionServiceTrait};
