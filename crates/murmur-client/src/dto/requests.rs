//! Request DTOs for client operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ids travel as strings and are parsed by the clients.

use murmur_core::{ReactionKind, TargetType};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size
pub const DEFAULT_PAGE_LIMIT: usize = 20;
/// Maximum page size
pub const MAX_PAGE_LIMIT: usize = 100;

// ============================================================================
// Circle Requests
// ============================================================================

/// Circle search request
///
/// A blank query is valid and matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchCirclesRequest {
    #[serde(default)]
    pub query: String,
}

impl SearchCirclesRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Join (or leave) circle request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinCircleRequest {
    #[validate(length(min = 1, message = "circleId is required"))]
    pub circle_id: String,
}

impl JoinCircleRequest {
    pub fn new(circle_id: impl Into<String>) -> Self {
        Self {
            circle_id: circle_id.into(),
        }
    }
}

/// Create circle request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCircleRequest {
    #[validate(length(min = 1, max = 50, message = "Circle name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCircleRequest {
    /// Trim the name and description; a blank description becomes `None`
    ///
    /// Length limits apply to the trimmed values, so validate the result.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}

/// Offset pagination
///
/// Missing values fall back to the defaults; out-of-range limits are clamped.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Effective page size (1-100)
    pub fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn offset(&self) -> usize {
        self.offset.unwrap_or(0)
    }
}

// ============================================================================
// Murmur Requests
// ============================================================================

/// Create murmur request
///
/// Content length is checked against the configured limit after trimming.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMurmurRequest {
    #[validate(length(min = 1, message = "circleId is required"))]
    pub circle_id: String,

    pub content: String,
}

impl CreateMurmurRequest {
    pub fn new(circle_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            circle_id: circle_id.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "murmurId is required"))]
    pub murmur_id: String,

    pub content: String,
}

impl CreateCommentRequest {
    pub fn new(murmur_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            murmur_id: murmur_id.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Set reaction request; `reaction: null` clears the viewer's reaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    #[validate(length(min = 1, message = "targetId is required"))]
    pub target_id: String,

    pub target_type: TargetType,

    #[serde(default)]
    pub reaction: Option<ReactionKind>,
}

impl ReactionRequest {
    pub fn new(
        target_id: impl Into<String>,
        target_type: TargetType,
        reaction: Option<ReactionKind>,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            target_type,
            reaction,
        }
    }
}
