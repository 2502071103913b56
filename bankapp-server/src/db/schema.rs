//! Schema initialization
//!
//! Two tables, created only if absent. There is no foreign key from
//! `transactions.user_id` to `users.id` and no unique index on
//! `users.username`.

use sqlx::SqlitePool;
use tracing::info;

/// Ensure the `users` and `transactions` tables exist.
///
/// Idempotent. Any failure is returned to the caller, which treats it as
/// fatal at startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            password TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            type TEXT NOT NULL,
            amount REAL NOT NULL,
            timestamp TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
    "#,
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn creates_both_tables() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert_eq!(table_names(&pool).await, vec!["transactions", "users"]);
    }

    #[tokio::test]
    async fn is_idempotent() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query("INSERT INTO users (username, password) VALUES ('a', 'b')")
            .execute(&pool)
            .await
            .unwrap();

        run_migrations(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn timestamp_is_defaulted() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query("INSERT INTO transactions (user_id, type, amount) VALUES (1, 'deposit', 1.0)")
            .execute(&pool)
            .await
            .unwrap();

        let (stamped,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM transactions WHERE timestamp IS NOT NULL")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(stamped, 1);
    }
}
