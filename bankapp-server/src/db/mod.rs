//! Database layer - connection pool, schema and repositories
//!
//! - One pool shared by every handler through `Store`, no global handle
//! - Schema is create-if-not-exists only
//! - Each repo call is a single statement, no explicit transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool};
pub use repos::{DbError, Store, TransactionRepo, UserRepo};
pub use schema::run_migrations;
