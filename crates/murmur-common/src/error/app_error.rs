//! Application error types
//!
//! Unified error handling for everything above the domain layer.

use murmur_core::DomainError;
use std::fmt;

use crate::config::ConfigError;

/// Failure taxonomy every error is folded into before it reaches a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, detected locally without a round-trip
    Validation,
    /// The referenced entity does not exist
    NotFound,
    /// The request collides with existing state
    Conflict,
    /// The data source failed (network, contract, store)
    Transport,
}

impl ErrorKind {
    /// Whether the caller caused the failure
    #[must_use]
    pub fn is_client_error(self) -> bool {
        !matches!(self, Self::Transport)
    }
}

impl From<&DomainError> for ErrorKind {
    fn from(err: &DomainError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else if err.is_validation() {
            Self::Validation
        } else if err.is_conflict() {
            Self::Conflict
        } else {
            Self::Transport
        }
    }
}

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) | Self::Config(_) => ErrorKind::Transport,
            Self::Domain(e) => ErrorKind::from(e),
        }
    }

    /// Get error code for responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if the caller caused this error
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.kind().is_client_error()
    }

    /// Create a not found error for a resource
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
