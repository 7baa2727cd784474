//! # wf-api
//!
//! JSON over HTTP for Workforce RS.
//!
//! Everything except `/login`, `/ping` and `/health` requires a bearer token.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::router;
