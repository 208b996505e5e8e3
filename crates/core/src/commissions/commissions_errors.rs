use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommissionError {
    #[error("Invalid commission: {0}")]
    InvalidCommission(String),
}
