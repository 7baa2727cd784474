//! # wf-db
//!
//! Database layer for Workforce RS.
//!
//! This crate provides PostgreSQL access using SQLx:
//!
//! - Connection pool management and bundled migrations
//! - One repository per entity (employees, cars, accommodations, projects)
//! - Credential lookup for login and the dashboard aggregates
//!
//! ## Example
//!
//! ```ignore
//! use wf_db::{Database, DatabaseConfig, CarRepository, Repository};
//!
//! let db = Database::connect(&DatabaseConfig::with_url(url)).await?;
//! db.migrate().await?;
//!
//! let cars = CarRepository::new(db.pool().clone());
//! let car = cars.get(1).await?;
//! ```

pub mod accommodations;
pub mod cars;
pub mod credentials;
pub mod dashboard;
pub mod employees;
pub mod pool;
pub mod projects;
pub mod repository;

// Re-exports
pub use accommodations::{AccommodationRepository, AccommodationRow};
pub use cars::{CarRepository, CarRow};
pub use credentials::CredentialRepository;
pub use dashboard::{rollup_project_counts, DashboardRepository, OTHER_PROJECTS_LABEL, TOP_PROJECTS};
pub use employees::{EmployeeRepository, EmployeeRow};
pub use pool::{Database, DatabaseConfig};
pub use projects::{ProjectRepository, ProjectRow};
pub use repository::{DbContext, Repository, RepositoryError, RepositoryResult};
