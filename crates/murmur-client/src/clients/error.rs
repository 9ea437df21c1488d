//! Client layer error types
//!
//! Provides a unified error type for all client operations. Errors never
//! leave the client layer as `Err`; [`respond`] folds them into the envelope.

use murmur_common::{AppError, ErrorKind};
use murmur_core::{DomainError, EntityId, EntityIdParseError};
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::dto::ApiResponse;

/// Client layer error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Domain rule violation or data source failure
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Application error (configuration, etc.)
    #[error("{0}")]
    App(#[from] AppError),

    /// Resource not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Request rejected before reaching the data source
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => ErrorKind::from(e),
            Self::App(e) => e.kind(),
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Internal(_) => ErrorKind::Transport,
        }
    }

    /// Get the error code for responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationErrors> for ClientError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string().trim_end().to_string())
    }
}

impl From<EntityIdParseError> for ClientError {
    fn from(err: EntityIdParseError) -> Self {
        match err {
            EntityIdParseError::InvalidFormat(raw) => Self::Domain(DomainError::InvalidId(raw)),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Domain(e) => AppError::Domain(e),
            ClientError::App(e) => e,
            ClientError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ClientError::Validation(msg) => AppError::Validation(msg),
            ClientError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Parse a wire id, reporting malformed input as a validation failure
pub(crate) fn parse_id(raw: &str) -> ClientResult<EntityId> {
    Ok(EntityId::parse(raw)?)
}

/// Fold an operation result into the envelope, logging failures
pub(crate) fn respond<T>(operation: &'static str, result: ClientResult<T>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(err) => {
            let kind = err.kind();
            if kind.is_client_error() {
                warn!(operation, code = err.error_code(), error = %err, "Request rejected");
            } else {
                error!(operation, code = err.error_code(), error = %err, "Request failed");
            }
            ApiResponse::failure(err.to_string())
        }
    }
}
