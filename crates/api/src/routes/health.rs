//! `GET /health`: liveness plus a check that the database answers and has
//! been migrated.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database is reachable and migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub schema_ready: bool,
    /// Expected tables that are absent. Empty when `schema_ready`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_tables: Vec<&'static str>,
}

impl HealthReport {
    fn is_ok(&self) -> bool {
        self.db_healthy && self.schema_ready
    }
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let missing = match wishlist_db::missing_tables(&state.pool).await {
        Ok(missing) => Some(missing),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            None
        }
    };

    let mut report = HealthReport {
        status: "degraded",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: missing.is_some(),
        schema_ready: missing.as_ref().is_some_and(Vec::is_empty),
        missing_tables: missing.unwrap_or_default(),
    };

    let code = if report.is_ok() {
        report.status = "ok";
        StatusCode::OK
    } else {
        if report.db_healthy {
            tracing::warn!(missing = ?report.missing_tables, "Database schema is incomplete");
        }
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
