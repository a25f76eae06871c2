use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// ISO-8601, UTC, without an offset suffix.
    pub timestamp: String,
    pub version: &'static str,
}

impl HealthStatus {
    fn now() -> Self {
        HealthStatus {
            status: HEALTHY,
            timestamp: Utc::now()
                .naive_utc()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub async fn health() -> (StatusCode, Json<HealthStatus>) {
    info!("Health check requested");
    (StatusCode::OK, Json(HealthStatus::now()))
}
