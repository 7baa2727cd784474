//! Core error types for Workforce RS
//!
//! Every layer converts its own failures into [`WfError`]. Wrapping with
//! operation context never hides the original kind: classification always
//! goes through [`WfError::root`].

use thiserror::Error;

/// Boxed error used to keep driver errors as a source without depending on
/// the driver crate here.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for all Workforce operations
#[derive(Error, Debug)]
pub enum WfError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: BoxError,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WfError>,
    },
}

/// Classification of a [`WfError`], independent of how often it was wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    Validation,
    Storage,
    Internal,
    Config,
}

impl WfError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        WfError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        WfError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn storage(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        WfError::Storage {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Wrap this error with an operation message
    pub fn context(self, context: impl Into<String>) -> Self {
        WfError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any number of context wrappers
    pub fn root(&self) -> &WfError {
        match self {
            WfError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            WfError::NotFound { .. } => ErrorKind::NotFound,
            WfError::Unauthorized { .. } => ErrorKind::Unauthorized,
            WfError::Validation(_) => ErrorKind::Validation,
            WfError::Storage { .. } => ErrorKind::Storage,
            WfError::Internal(_) => ErrorKind::Internal,
            WfError::Config(_) => ErrorKind::Config,
            WfError::Context { .. } => unreachable!("root() never returns a context wrapper"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    /// HTTP status code mapping
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Validation => 400,
            ErrorKind::Storage | ErrorKind::Internal | ErrorKind::Config => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Validation => "invalid_request",
            ErrorKind::Storage => "storage_error",
            ErrorKind::Internal => "internal_error",
            ErrorKind::Config => "configuration_error",
        }
    }
}

/// Attach operation context to any fallible result
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T, WfError>;
}

impl<T, E: Into<WfError>> ResultExt<T> for Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T, WfError> {
        self.map_err(|e| e.into().context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_survives_wrapping() {
        let err = WfError::not_found("Car", 7)
            .context("failed to retrieve car")
            .context("failed to retrieve updated car");

        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(
            err.to_string(),
            "failed to retrieve updated car: failed to retrieve car: Not found: Car with id=7"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(WfError::unauthorized("bad password").status_code(), 401);
        assert_eq!(WfError::Validation("bad id".into()).status_code(), 400);
        assert_eq!(WfError::Internal("boom".into()).status_code(), 500);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let storage = WfError::storage("failed to query for cars", io);
        assert_eq!(storage.kind(), ErrorKind::Storage);
        assert_eq!(storage.status_code(), 500);
        assert_eq!(storage.error_code(), "storage_error");
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), WfError> = Err(WfError::unauthorized("no such login"));
        let wrapped = result.context("failed to log in").unwrap_err();

        assert!(wrapped.is_unauthorized());
        assert!(matches!(wrapped, WfError::Context { .. }));
    }
}
