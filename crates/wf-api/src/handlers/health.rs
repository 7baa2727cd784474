//! Liveness and readiness probes

use std::time::{Duration, Instant};

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::extractors::AppState;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: &'static str,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: &'static str,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// GET /ping
pub async fn ping() -> &'static str {
    "."
}

/// GET /health
///
/// Ready only when the database answers within the timeout.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let started = Instant::now();
    let outcome = tokio::time::timeout(CHECK_TIMEOUT, state.service.ping()).await;

    let (status, message) = match outcome {
        Ok(Ok(())) => (HealthStatus::Healthy, None),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Database health check failed");
            (
                HealthStatus::Unhealthy,
                Some("database unreachable".to_string()),
            )
        }
        Err(_) => {
            tracing::warn!("Database health check timed out");
            (
                HealthStatus::Unhealthy,
                Some("database check timed out".to_string()),
            )
        }
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        components: vec![ComponentHealth {
            name: "database",
            status,
            message,
            response_time_ms: started.elapsed().as_millis() as u64,
        }],
        timestamp: chrono::Utc::now(),
    };

    (report.http_status(), Json(report))
}
