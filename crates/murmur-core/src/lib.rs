//! # murmur-core
//!
//! Domain layer containing entities, value objects, the reaction state machine
//! and repository traits. This crate has no dependencies on infrastructure.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{normalize_content, Circle, Comment, Murmur, User};
pub use error::DomainError;
pub use traits::{
    CircleRepository, CommentRepository, MembershipChange, MurmurRepository, ReactionRepository,
    RepoResult, UserRepository,
};
pub use value_objects::{
    EntityId, EntityIdParseError, IdGenerator, InvalidWorkerId, ReactionCounts, ReactionDelta,
    ReactionKind, ReactionTarget, TargetType,
};
