//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse a record identifier taken from a request path.
///
/// Identifiers are store-assigned signed 64-bit integers. Surrounding
/// whitespace is not tolerated.
///
/// # Example
/// ```
/// use bankapp_server::models::parse_record_id;
///
/// assert_eq!(parse_record_id("42").unwrap(), 42);
/// assert!(parse_record_id("abc").is_err());
/// assert!(parse_record_id("").is_err());
/// ```
pub fn parse_record_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}
