//! Domain models
//!
//! Records as read from the store, and the payloads accepted on create.
//! Create payloads are deliberately permissive: missing fields take their
//! zero value and nothing beyond JSON shape is checked.

pub mod validation;
pub mod user;
pub mod transaction;

pub use validation::{parse_record_id, ValidationError};
pub use user::{NewUser, User};
pub use transaction::{NewTransaction, Transaction};
