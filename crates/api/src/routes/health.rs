//! Liveness and readiness check for the music store.
//!
//! Reports whether PostgreSQL answers, which migration the schema is at, and
//! how busy the connection pool is. An unreachable database turns the check
//! into a 503 so load balancers stop routing to this instance.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"unavailable"`.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Latest applied migration; absent when the database cannot be read.
    pub schema_version: Option<i64>,
    pub pool_size: u32,
    pub idle_connections: usize,
}

/// GET /health
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let schema_version = musicdb_db::schema_version(&state.pool)
        .await
        .inspect_err(|err| {
            tracing::warn!(error = %err, "Health check could not reach the database");
        });
    let reachable = schema_version.is_ok();

    let database = DatabaseHealth {
        reachable,
        schema_version: schema_version.ok().flatten(),
        pool_size: state.pool.size(),
        idle_connections: state.pool.num_idle(),
    };

    let (status, label) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(HealthResponse {
            status: label,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
