//! User repository
//!
//! - create: plain INSERT, username uniqueness is not enforced
//! - list: full scan ordered by id

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every user. An empty table yields an empty vec.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, password FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Get a single user by id.
    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    /// Insert a user, returning the assigned id.
    pub async fn create(&self, new: &NewUser) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(&new.username)
            .bind(&new.password)
            .execute(self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }
}
