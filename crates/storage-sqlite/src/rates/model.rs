//! Database models for exchange rates.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kantor_core::rates::ExchangeRate;

/// Database model for exchange rates.
#[derive(
    Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::exchange_rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateDB {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: String,
    pub created_at: String,
    pub updated_at: String,
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<ExchangeRateDB> for ExchangeRate {
    fn from(db: ExchangeRateDB) -> Self {
        ExchangeRate {
            id: db.id,
            from_currency: db.from_currency,
            to_currency: db.to_currency,
            rate: Decimal::from_str(&db.rate).unwrap_or_default(),
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<&ExchangeRate> for ExchangeRateDB {
    fn from(rate: &ExchangeRate) -> Self {
        ExchangeRateDB {
            id: rate.id.clone(),
            from_currency: rate.from_currency.clone(),
            to_currency: rate.to_currency.clone(),
            rate: rate.rate.to_string(),
            created_at: rate.created_at.to_rfc3339(),
            updated_at: rate.updated_at.to_rfc3339(),
        }
    }
}
