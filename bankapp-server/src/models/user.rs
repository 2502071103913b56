//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record from the store.
///
/// The password is stored as given and never serialized outbound.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Create user request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
