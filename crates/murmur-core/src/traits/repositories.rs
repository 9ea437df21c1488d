//! Repository traits (ports) - define the interface for data access
//!
//! The client layer depends only on these traits. The in-memory store is one
//! implementation; a networked or contract-backed adapter is another.
//! Operations that read and then write (register, create circle, join, leave,
//! react, add comment) are single repository calls so that an implementation
//! can make them atomic.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::{Circle, Comment, Murmur, User};
use crate::error::DomainError;
use crate::value_objects::{EntityId, ReactionCounts, ReactionKind, ReactionTarget};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>>;

    /// Find several users at once; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<User>>;

    /// Find user by normalized wallet address
    async fn find_by_address(&self, address: &str) -> RepoResult<Option<User>>;

    /// Return the user registered under `user.address`, registering `user` if there is none
    ///
    /// Lookup and insert happen as one step, so concurrent first-time
    /// connects for the same wallet resolve to the same user.
    async fn find_or_create(&self, user: &User) -> RepoResult<User>;
}

// ============================================================================
// Circle Repository
// ============================================================================

/// Result of a membership change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    /// Circle after the change
    pub circle: Circle,
    /// False when the viewer already had the requested membership state
    pub changed: bool,
}

#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Find circle by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Circle>>;

    /// List circles newest-first with offset pagination
    async fn list(&self, limit: usize, offset: usize) -> RepoResult<Vec<Circle>>;

    /// Total number of circles
    async fn count(&self) -> RepoResult<u64>;

    /// Circles whose name or description contains the query (case-insensitive)
    async fn search(&self, query: &str) -> RepoResult<Vec<Circle>>;

    /// Circles the viewer has joined
    async fn find_joined(&self, viewer_id: EntityId) -> RepoResult<Vec<Circle>>;

    /// IDs of the circles the viewer has joined
    async fn joined_ids(&self, viewer_id: EntityId) -> RepoResult<Vec<EntityId>>;

    /// Check if the viewer is a member of the circle
    async fn is_member(&self, circle_id: EntityId, viewer_id: EntityId) -> RepoResult<bool>;

    /// Store a new circle with `creator_id` as its first member (`member_count` 1)
    async fn create_with_member(&self, circle: &Circle, creator_id: EntityId)
        -> RepoResult<Circle>;

    /// Make the viewer a member; `member_count` grows only on the first join
    async fn add_member(&self, circle_id: EntityId, viewer_id: EntityId)
        -> RepoResult<MembershipChange>;

    /// Remove the viewer's membership; `member_count` shrinks only if it existed
    async fn remove_member(
        &self,
        circle_id: EntityId,
        viewer_id: EntityId,
    ) -> RepoResult<MembershipChange>;
}

// ============================================================================
// Murmur Repository
// ============================================================================

#[async_trait]
pub trait MurmurRepository: Send + Sync {
    /// Find murmur by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Murmur>>;

    /// All murmurs of a circle in insertion order
    async fn find_by_circle(&self, circle_id: EntityId) -> RepoResult<Vec<Murmur>>;

    /// Create a new murmur
    async fn create(&self, murmur: &Murmur) -> RepoResult<()>;

    /// Store a comment and attach it to its murmur as the newest comment
    ///
    /// Fails with `MurmurNotFound` and stores nothing if the murmur does not exist.
    async fn add_comment(&self, comment: &Comment) -> RepoResult<Murmur>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Comment>>;

    /// Find several comments, preserving the order of `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<Comment>>;

    /// All comments written on a murmur in insertion order
    async fn find_by_murmur(&self, murmur_id: EntityId) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// The viewer's active reactions on several targets (targets without one are absent)
    async fn find_many(
        &self,
        viewer_id: EntityId,
        targets: &[ReactionTarget],
    ) -> RepoResult<HashMap<ReactionTarget, ReactionKind>>;

    /// Move the viewer to `reaction` on the target and return the new counters
    ///
    /// Fails with `TargetNotFound` if the target does not exist.
    async fn apply(
        &self,
        viewer_id: EntityId,
        target: ReactionTarget,
        reaction: Option<ReactionKind>,
    ) -> RepoResult<ReactionCounts>;
}
