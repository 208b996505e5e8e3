use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use kantor_core::commissions::{Commission, CommissionRepositoryTrait};
use kantor_core::Result;

use super::model::CommissionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::commissions;

pub struct CommissionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CommissionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CommissionRepository { pool, writer }
    }
}

#[async_trait]
impl CommissionRepositoryTrait for CommissionRepository {
    fn get_commissions(&self) -> Result<Vec<Commission>> {
        let mut conn = get_connection(&self.pool)?;
        let records = commissions::table
            .load::<CommissionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records.into_iter().map(Commission::from).collect())
    }

    fn get_commission(&self, from: &str, to: &str) -> Result<Option<Commission>> {
        let mut conn = get_connection(&self.pool)?;
        let record = commissions::table
            .filter(commissions::from_currency.eq(from))
            .filter(commissions::to_currency.eq(to))
            .first::<CommissionDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(record.map(Commission::from))
    }

    async fn upsert_commission(&self, commission: Commission) -> Result<Commission> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Commission> {
                let db_record = CommissionDB::from(&commission);

                diesel::insert_into(commissions::table)
                    .values(&db_record)
                    .on_conflict(commissions::id)
                    .do_update()
                    .set((
                        commissions::percent.eq(&db_record.percent),
                        commissions::updated_at.eq(&db_record.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let stored = commissions::table
                    .find(&db_record.id)
                    .first::<CommissionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Commission::from(stored))
            })
            .await
    }
}
