//! Response DTOs
//!
//! All response DTOs serialize as camelCase JSON. Entity ids are rendered as
//! strings and timestamps as RFC 3339.

use chrono::{DateTime, Utc};
use murmur_core::ReactionKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Envelope
// ============================================================================

/// Uniform result envelope returned by every client operation
///
/// On success `data` is set and `message` may carry an informational note.
/// On failure `error` holds a human-readable description and `data` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Attach an informational message to a successful response
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if self.success {
            self.message = Some(message.into());
        }
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Convert back into a `Result`, yielding the error text on failure
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "response carried no data".to_string())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            error: self.error,
        }
    }
}

/// Offset-paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Whether items exist beyond this page
    pub fn has_more(&self) -> bool {
        ((self.offset + self.items.len()) as u64) < self.total
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub address: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

// ============================================================================
// Circle Responses
// ============================================================================

/// Circle as seen by the current viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
    pub is_joined: bool,
}

// ============================================================================
// Murmur / Comment Responses
// ============================================================================

/// Murmur with its author, comments and the viewer's reaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MurmurResponse {
    pub id: String,
    pub circle_id: String,
    pub author_id: String,
    #[serde(default)]
    pub author: Option<UserResponse>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub dislike_count: u64,
    pub comment_count: usize,
    pub user_reaction: Option<ReactionKind>,
    /// Newest first
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub murmur_id: String,
    pub author_id: String,
    #[serde(default)]
    pub author: Option<UserResponse>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub dislike_count: u64,
    pub user_reaction: Option<ReactionKind>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Target counters after a reaction change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCountsResponse {
    pub like_count: u64,
    pub dislike_count: u64,
}
