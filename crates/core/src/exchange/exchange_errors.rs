use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Unsupported pair: {0}")]
    UnsupportedPair(String),

    #[error("Exchange rate not found: {0}")]
    RateNotFound(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unsupported operation type: {0}")]
    UnsupportedOperation(String),

    #[error("Currency conversion error: {0}")]
    ConversionFailed(String),
}
