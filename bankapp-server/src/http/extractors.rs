//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{parse_record_id, ValidationError};

/// Extract and validate a numeric record id from path
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: "must be an integer",
                })
            })?;

        Ok(Self(parse_record_id(&raw)?))
    }
}

/// JSON request body that ignores Content-Type.
///
/// Unlike `axum::Json`, every decode failure is a 400 carrying the
/// decoder's message as plain text. The top-level value must be an object:
/// serde would otherwise accept a struct written as an array, and `null`
/// is not a record either.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        if !value.is_object() {
            return Err(ApiError::MalformedBody(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
