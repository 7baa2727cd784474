//! # wf-services
//!
//! Application layer for Workforce RS.
//!
//! [`WorkforceService`] exposes one method per use case. Writes are followed
//! by a read of the stored entity, and every error is wrapped with the use
//! case that failed while keeping its original kind.

use std::sync::Arc;

use wf_auth::JwtService;
use wf_core::WfResult;
use wf_db::{
    AccommodationRepository, CarRepository, CredentialRepository, DashboardRepository, Database,
    EmployeeRepository, ProjectRepository,
};

mod accommodations;
mod auth;
mod cars;
mod dashboard;
mod employees;
mod projects;

pub use auth::authenticate;

/// Use cases over the shared database pool
#[derive(Clone)]
pub struct WorkforceService {
    db: Database,
    employees: EmployeeRepository,
    cars: CarRepository,
    accommodations: AccommodationRepository,
    projects: ProjectRepository,
    credentials: CredentialRepository,
    dashboard: DashboardRepository,
    jwt: Arc<JwtService>,
}

impl WorkforceService {
    pub fn new(db: Database, jwt: Arc<JwtService>) -> Self {
        let pool = db.pool().clone();
        Self {
            employees: EmployeeRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            accommodations: AccommodationRepository::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            credentials: CredentialRepository::new(pool.clone()),
            dashboard: DashboardRepository::new(pool),
            db,
            jwt,
        }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Database round-trip for readiness checks
    pub async fn ping(&self) -> WfResult<()> {
        self.db
            .ping()
            .await
            .map_err(|e| wf_core::WfError::storage("database ping failed", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use wf_core::ErrorKind;

    /// Service whose pool can never hand out a connection
    fn unreachable_service() -> WorkforceService {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy("postgres://workforce@127.0.0.1:1/workforce")
            .unwrap();
        let jwt = JwtService::new(b"test-secret-key-at-least-32-bytes", "api", 86_400);
        WorkforceService::new(Database::from_pool(pool), Arc::new(jwt))
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_kind_and_use_case() {
        let err = unreachable_service().get_car(1).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert!(err.to_string().starts_with("failed to get car"));
    }

    #[tokio::test]
    async fn test_dashboard_fails_as_a_whole() {
        let err = unreachable_service().dashboard().await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_ping_reports_storage_error() {
        let err = unreachable_service().ping().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
