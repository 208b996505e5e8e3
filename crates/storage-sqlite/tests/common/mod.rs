use std::sync::Arc;

use kantor_storage_sqlite::db::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};
use tempfile::TempDir;

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Keeps the database directory alive for the duration of the test.
    _dir: TempDir,
}

/// Builds a migrated SQLite database in a temporary directory and spawns
/// the writer actor. Must run inside a tokio runtime.
pub fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir
        .path()
        .join("kantor-test.db")
        .to_string_lossy()
        .to_string();

    let pool = create_pool(&db_path).unwrap();
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());

    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}
