//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EntityId, ReactionTarget};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Circle not found: {0}")]
    CircleNotFound(EntityId),

    #[error("Murmur not found: {0}")]
    MurmurNotFound(EntityId),

    #[error("Reaction target not found: {0}")]
    TargetNotFound(ReactionTarget),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Content must not be empty")]
    ContentEmpty,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Invalid wallet address: {0:?}")]
    InvalidAddress(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Entity already exists: {0}")]
    AlreadyExists(EntityId),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Transport error: {0}")]
    TransportError(String),
}

impl DomainError {
    /// Get an error code string for responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CircleNotFound(_) => "UNKNOWN_CIRCLE",
            Self::MurmurNotFound(_) => "UNKNOWN_MURMUR",
            Self::TargetNotFound(_) => "UNKNOWN_TARGET",

            // Validation
            Self::ContentEmpty => "CONTENT_EMPTY",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidId(_) => "INVALID_ID",
            Self::InvalidAddress(_) => "INVALID_ADDRESS",

            // Conflict
            Self::AlreadyExists(_) => "ALREADY_EXISTS",

            // Infrastructure
            Self::TransportError(_) => "TRANSPORT_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CircleNotFound(_)
                | Self::MurmurNotFound(_)
                | Self::TargetNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ContentEmpty
                | Self::ContentTooLong { .. }
                | Self::InvalidId(_)
                | Self::InvalidAddress(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// Check if this error came from the data source rather than the caller
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::CircleNotFound(EntityId::new(1));
        assert_eq!(err.code(), "UNKNOWN_CIRCLE");

        let err = DomainError::TransportError("connection reset".to_string());
        assert_eq!(err.code(), "TRANSPORT_ERROR");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::MurmurNotFound(EntityId::new(1)).is_not_found());
        assert!(DomainError::TargetNotFound(ReactionTarget::comment(EntityId::new(2))).is_not_found());
        assert!(DomainError::ContentEmpty.is_validation());
        assert!(DomainError::InvalidId("x".to_string()).is_validation());
        assert!(DomainError::TransportError("poisoned".to_string()).is_transport());
        assert!(!DomainError::ContentEmpty.is_transport());
        assert!(DomainError::AlreadyExists(EntityId::new(3)).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::CircleNotFound(EntityId::new(99));
        assert_eq!(err.to_string(), "Circle not found: 99");

        let err = DomainError::ContentTooLong { max: 1000 };
        assert_eq!(err.to_string(), "Content too long: max 1000 characters");

        let err = DomainError::TargetNotFound(ReactionTarget::murmur(EntityId::new(5)));
        assert_eq!(err.to_string(), "Reaction target not found: murmur:5");
    }
}
