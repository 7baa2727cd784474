//! # wf-core
//!
//! Core types shared by every Workforce RS crate:
//! - Error taxonomy ([`WfError`]) and the [`ResultExt`] context helper
//! - Primary key type
//! - Application configuration

pub mod config;
pub mod error;

pub use error::*;

/// Primary key type (database `BIGINT` identity)
pub type Id = i64;

/// Result type for application operations
pub type WfResult<T> = Result<T, WfError>;
