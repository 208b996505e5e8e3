//! SQLite storage implementation for Kantor.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `kantor-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for commissions and exchange rates
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel exists; the
//! core stays database-agnostic and works with traits. All writes funnel
//! through a single-writer actor so that the forward/reverse halves of a
//! rate pair commit in one transaction.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod commissions;
pub mod rates;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from kantor-core for convenience
pub use kantor_core::errors::{DatabaseError, Error, Result};
