//! Transaction endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{NewTransaction, Transaction};

/// GET /transactions - list all transactions
async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.store.transactions().list().await?;
    Ok(Json(transactions))
}

/// GET /transactions/{id} - get a single transaction
async fn get_transaction(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state.store.transactions().get(id).await?;
    Ok(Json(transaction))
}

/// POST /transactions - record a transaction
///
/// The owning user is not looked up and the amount may be any float.
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewTransaction>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.store.transactions().create(&req).await?;
    tracing::info!(transaction_id = id, user_id = req.user_id, kind = %req.kind, "transaction created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/transactions/{}", id))],
        "Transaction created successfully",
    ))
}

/// Transaction routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/{id}", get(get_transaction))
}
