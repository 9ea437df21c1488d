//! Error helpers for repositories

use murmur_core::{DomainError, EntityId};

/// Create an "entity already exists" error
pub fn already_exists(id: EntityId) -> DomainError {
    DomainError::AlreadyExists(id)
}

/// Create a "circle not found" error
pub fn circle_not_found(id: EntityId) -> DomainError {
    DomainError::CircleNotFound(id)
}

/// Create a "murmur not found" error
pub fn murmur_not_found(id: EntityId) -> DomainError {
    DomainError::MurmurNotFound(id)
}
