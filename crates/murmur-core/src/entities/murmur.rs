//! Murmur entity - a short text item posted into a circle

use chrono::{DateTime, Utc};

use crate::value_objects::{EntityId, ReactionCounts};

/// Default maximum murmur length (characters)
pub const DEFAULT_MAX_MURMUR_LENGTH: usize = 1000;

/// Murmur entity
///
/// Owned by exactly one circle (`circle_id`). Owns its comments through
/// `comment_ids`, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Murmur {
    pub id: EntityId,
    pub circle_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub counts: ReactionCounts,
    pub comment_ids: Vec<EntityId>,
}

impl Murmur {
    /// Create a new Murmur with zeroed counters and no comments
    pub fn new(id: EntityId, circle_id: EntityId, author_id: EntityId, content: String) -> Self {
        Self {
            id,
            circle_id,
            author_id,
            content,
            created_at: Utc::now(),
            counts: ReactionCounts::default(),
            comment_ids: Vec::new(),
        }
    }

    #[inline]
    pub fn comment_count(&self) -> usize {
        self.comment_ids.len()
    }

    /// Attach a comment as the newest one
    ///
    /// Returns false if the comment was already attached.
    pub fn attach_comment(&mut self, comment_id: EntityId) -> bool {
        if self.comment_ids.contains(&comment_id) {
            return false;
        }
        self.comment_ids.insert(0, comment_id);
        true
    }
}
