//! bankapp-server: HTTP service over users and transactions
//!
//! Exposes list/get/create endpoints for the two record types, backed
//! by a SQLite file through a sqlx pool.

pub mod db;
pub mod http;
pub mod models;

pub use db::Store;
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
