use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::make_pair_key;

/// A commission percentage for one ordered currency pair.
///
/// Commissions are directional: a record for (A,B) says nothing about (B,A).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub percent: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Commission {
    /// Identity key of the ordered pair this commission applies to.
    pub fn make_commission_id(from: &str, to: &str) -> String {
        make_pair_key(from, to)
    }
}

/// Caller-supplied payload for creating or updating a commission.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCommission {
    pub from_currency: String,
    pub to_currency: String,
    pub percent: Decimal,
}
