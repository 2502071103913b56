//! Route handlers organized by resource

pub mod health;
pub mod transactions;
pub mod users;
