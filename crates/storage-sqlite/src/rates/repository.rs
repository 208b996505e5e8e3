use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use kantor_core::rates::{ExchangeRate, RateRepositoryTrait};
use kantor_core::Result;

use super::model::ExchangeRateDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::exchange_rates;

pub struct RateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RateRepository { pool, writer }
    }
}

#[async_trait]
impl RateRepositoryTrait for RateRepository {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        let mut conn = get_connection(&self.pool)?;
        let records = exchange_rates::table
            .load::<ExchangeRateDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(ExchangeRate::from).collect())
    }

    fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Option<ExchangeRate>> {
        let mut conn = get_connection(&self.pool)?;
        let record = exchange_rates::table
            .filter(exchange_rates::from_currency.eq(from))
            .filter(exchange_rates::to_currency.eq(to))
            .first::<ExchangeRateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(record.map(ExchangeRate::from))
    }

    /// Both halves of the pair commit in one writer-actor transaction; a
    /// reader never observes only one side updated.
    async fn upsert_rate_pair(
        &self,
        forward: ExchangeRate,
        reverse: ExchangeRate,
    ) -> Result<ExchangeRate> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ExchangeRate> {
                let forward_db = ExchangeRateDB::from(&forward);
                let reverse_db = ExchangeRateDB::from(&reverse);

                for db_record in [&forward_db, &reverse_db] {
                    diesel::insert_into(exchange_rates::table)
                        .values(db_record)
                        .on_conflict(exchange_rates::id)
                        .do_update()
                        .set((
                            exchange_rates::rate.eq(&db_record.rate),
                            exchange_rates::updated_at.eq(&db_record.updated_at),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                let stored = exchange_rates::table
                    .find(&forward_db.id)
                    .first::<ExchangeRateDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(ExchangeRate::from(stored))
            })
            .await
    }
}
