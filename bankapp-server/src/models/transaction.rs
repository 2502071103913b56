//! Transaction records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction record from the store.
///
/// `user_id` is not checked against existing users, and `kind` is a free
/// label ("deposit", "withdrawal", ...). The timestamp is assigned by the
/// store on insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Create transaction request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewTransaction {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_wire_names() {
        let tx = Transaction {
            id: 1,
            user_id: 1,
            kind: "deposit".into(),
            amount: 100.0,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "deposit");
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["timestamp"], "2024-01-02T03:04:05Z");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn accepts_any_amount_and_label() {
        let new: NewTransaction =
            serde_json::from_str(r#"{"user_id": 42, "type": "refund?", "amount": -3.25}"#).unwrap();
        assert_eq!(new.user_id, 42);
        assert_eq!(new.kind, "refund?");
        assert_eq!(new.amount, -3.25);
    }

    #[test]
    fn rejects_wrong_types() {
        let result = serde_json::from_str::<NewTransaction>(r#"{"amount": "lots"}"#);
        assert!(result.is_err());
    }
}
