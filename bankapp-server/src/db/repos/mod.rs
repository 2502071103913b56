//! Repository implementations for database access
//!
//! `Store` owns the pool; each repo borrows it for the duration of a call.

pub mod transactions;
pub mod users;

use sqlx::SqlitePool;

pub use transactions::TransactionRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Record store over a SQLite pool.
///
/// Cheap to clone; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn transactions(&self) -> TransactionRepo<'_> {
        TransactionRepo::new(&self.pool)
    }
}
