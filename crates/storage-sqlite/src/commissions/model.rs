//! Database models for commissions.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kantor_core::commissions::Commission;

/// Database model for commissions.
#[derive(
    Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, Serialize, Deserialize,
)]
#[diesel(table_name = crate::schema::commissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CommissionDB {
    pub id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub percent: String,
    pub created_at: String,
    pub updated_at: String,
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<CommissionDB> for Commission {
    fn from(db: CommissionDB) -> Self {
        Commission {
            id: db.id,
            from_currency: db.from_currency,
            to_currency: db.to_currency,
            percent: Decimal::from_str(&db.percent).unwrap_or_default(),
            created_at: parse_datetime(&db.created_at),
            updated_at: parse_datetime(&db.updated_at),
        }
    }
}

impl From<&Commission> for CommissionDB {
    fn from(commission: &Commission) -> Self {
        CommissionDB {
            id: commission.id.clone(),
            from_currency: commission.from_currency.clone(),
            to_currency: commission.to_currency.clone(),
            percent: commission.percent.to_string(),
            created_at: commission.created_at.to_rfc3339(),
            updated_at: commission.updated_at.to_rfc3339(),
        }
    }
}
