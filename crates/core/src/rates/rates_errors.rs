use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
