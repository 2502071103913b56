//! User endpoints

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
use crate::models::{NewUser, User};

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.users().list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<User>, ApiError> {
    let user = state.store.users().get(id).await?;
    Ok(Json(user))
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.store.users().create(&req).await?;
    tracing::info!(user_id = id, "user created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", id))],
        "User created successfully",
    ))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
}
