//! Transaction repository
//!
//! Rows are immutable once written. The timestamp column is filled by the
//! store default, never by the caller.

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{NewTransaction, Transaction};

const SELECT_COLUMNS: &str = "SELECT id, user_id, type, amount, timestamp FROM transactions";

/// Transaction repository
pub struct TransactionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TransactionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every transaction, oldest id first.
    pub async fn list(&self) -> Result<Vec<Transaction>, DbError> {
        let query = format!("{SELECT_COLUMNS} ORDER BY id");
        let transactions = sqlx::query_as::<_, Transaction>(&query)
            .fetch_all(self.pool)
            .await?;
        Ok(transactions)
    }

    /// Get a single transaction by id.
    pub async fn get(&self, id: i64) -> Result<Transaction, DbError> {
        let query = format!("{SELECT_COLUMNS} WHERE id = ?");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "transaction",
                id: id.to_string(),
            })
    }

    /// Insert a transaction, returning the assigned id.
    ///
    /// `user_id` is stored as given; no user needs to exist.
    pub async fn create(&self, new: &NewTransaction) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO transactions (user_id, type, amount) VALUES (?, ?, ?)")
            .bind(new.user_id)
            .bind(&new.kind)
            .bind(new.amount)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }
}
