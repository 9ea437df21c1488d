//! Reaction state machine
//!
//! Per viewer and per target the state is one of `none`, `liked` or
//! `disliked` (`Option<ReactionKind>`). Moving between states yields a
//! [`ReactionDelta`] that is applied to the target's aggregate counters.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Active reaction of a viewer on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity a reaction points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Murmur,
    Comment,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Murmur => f.write_str("murmur"),
            Self::Comment => f.write_str("comment"),
        }
    }
}

/// A reactable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactionTarget {
    pub target_type: TargetType,
    pub id: EntityId,
}

impl ReactionTarget {
    pub const fn murmur(id: EntityId) -> Self {
        Self {
            target_type: TargetType::Murmur,
            id,
        }
    }

    pub const fn comment(id: EntityId) -> Self {
        Self {
            target_type: TargetType::Comment,
            id,
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target_type, self.id)
    }
}

/// Counter change produced by one state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionDelta {
    pub like: i64,
    pub dislike: i64,
}

impl ReactionDelta {
    /// Delta for moving a viewer from `from` to `to`
    ///
    /// Setting the state it already has is a no-op.
    pub fn transition(from: Option<ReactionKind>, to: Option<ReactionKind>) -> Self {
        let mut delta = Self::default();
        if from == to {
            return delta;
        }
        match from {
            Some(ReactionKind::Like) => delta.like -= 1,
            Some(ReactionKind::Dislike) => delta.dislike -= 1,
            None => {}
        }
        match to {
            Some(ReactionKind::Like) => delta.like += 1,
            Some(ReactionKind::Dislike) => delta.dislike += 1,
            None => {}
        }
        delta
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.like == 0 && self.dislike == 0
    }
}

/// Aggregate like/dislike counters of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCounts {
    pub like_count: u64,
    pub dislike_count: u64,
}

impl ReactionCounts {
    pub const fn new(like_count: u64, dislike_count: u64) -> Self {
        Self {
            like_count,
            dislike_count,
        }
    }

    /// Apply a delta; counters never go below zero
    pub fn apply(&mut self, delta: ReactionDelta) {
        self.like_count = self.like_count.saturating_add_signed(delta.like);
        self.dislike_count = self.dislike_count.saturating_add_signed(delta.dislike);
    }
}
