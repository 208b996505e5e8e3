use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an exchange request.
///
/// GIVE: the caller supplies the amount handed over; the received amount is
/// computed. GET: the caller supplies the desired amount; the required input
/// is computed. `Unknown` absorbs unrecognized wire values so they fail in
/// the calculator rather than at deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    Give,
    Get,
    #[serde(other)]
    Unknown,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Give => "GIVE",
            OperationType::Get => "GET",
            OperationType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient exchange quote request. Exactly one of the two amounts is
/// supplied by the caller; the calculator fills in the other and returns
/// the same object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest {
    pub amount_from: Option<Decimal>,
    pub amount_to: Option<Decimal>,
    pub currency_from: String,
    pub currency_to: String,
    pub operation_type: OperationType,
}
