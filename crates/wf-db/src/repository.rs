//! Repository traits and shared error handling
//!
//! Every entity repository exposes the same five operations; lookups and
//! aggregate reads live as inherent methods on the concrete repositories.

use async_trait::async_trait;
use wf_core::{Id, WfError};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<RepositoryError> for WfError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => WfError::NotFound { entity, id },
            RepositoryError::Database { context, source } => WfError::storage(context, source),
        }
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Attach the failing statement's description to a driver error
pub trait DbContext<T> {
    fn context(self, context: &'static str) -> RepositoryResult<T>;
}

impl<T> DbContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> RepositoryResult<T> {
        self.map_err(|source| RepositoryError::Database { context, source })
    }
}

/// Base repository trait for CRUD operations
///
/// Only `get` reports a missing primary record; `update` and `remove` of an
/// unknown id touch no rows and succeed. Multi-table writes are all-or-nothing.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send;
    type New: Sync;
    type Update: Sync;

    /// All records in ascending id order
    async fn list(&self) -> RepositoryResult<Vec<Self::Record>>;

    async fn get(&self, id: Id) -> RepositoryResult<Self::Record>;

    /// Insert the record with its owned details; returns the new id
    async fn add(&self, new: &Self::New) -> RepositoryResult<Id>;

    /// Replace the record with its owned details
    async fn update(&self, id: Id, update: &Self::Update) -> RepositoryResult<()>;

    /// Delete the record, its owned details and any assignments to it
    async fn remove(&self, id: Id) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::ErrorKind;

    #[test]
    fn test_not_found_converts() {
        let err: WfError = RepositoryError::not_found("car", 9).into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: car with id=9");
    }

    #[test]
    fn test_database_error_keeps_context() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        let err = result.context("failed to load car").unwrap_err();
        assert!(err.to_string().starts_with("failed to load car"));

        let err: WfError = err.into();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
