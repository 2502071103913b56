//! Health check endpoint
//!
//! Reports the crate version and whether the store answers a trivial
//! query. A dead store still yields 200 so the probe itself never errors.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let reachable = sqlx::query("SELECT 1")
        .execute(state.store.pool())
        .await
        .map_err(|e| tracing::warn!("health check query failed: {}", e))
        .is_ok();

    Json(HealthResponse {
        status: if reachable { "ok" } else { "degraded" },
        database: if reachable { "reachable" } else { "unreachable" },
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, Store};

    async fn state() -> State<Arc<AppState>> {
        let pool = create_memory_pool().await.unwrap();
        State(Arc::new(AppState {
            store: Store::new(pool),
        }))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health(state().await).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "reachable");
    }

    #[tokio::test]
    async fn closed_pool_is_degraded() {
        let state = state().await;
        state.store.pool().close().await;

        let Json(body) = health(state).await;
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database, "unreachable");
    }
}
