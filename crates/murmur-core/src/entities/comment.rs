//! Comment entity - a reply attached to a murmur

use chrono::{DateTime, Utc};

use crate::value_objects::{EntityId, ReactionCounts};

/// Default maximum comment length (characters)
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 1000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: EntityId,
    pub murmur_id: EntityId,
    pub author_id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub counts: ReactionCounts,
}

impl Comment {
    /// Create a new Comment with zeroed counters
    pub fn new(id: EntityId, murmur_id: EntityId, author_id: EntityId, content: String) -> Self {
        Self {
            id,
            murmur_id,
            author_id,
            content,
            created_at: Utc::now(),
            counts: ReactionCounts::default(),
        }
    }
}
