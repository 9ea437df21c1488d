//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Per-viewer state (membership, reactions) is joined in through the helper
//! structs below.

use murmur_core::{Circle, Comment, Murmur, ReactionCounts, ReactionKind, User};

use super::responses::{
    CircleResponse, CommentResponse, MurmurResponse, ReactionCountsResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            address: user.address.clone(),
            nickname: user.nickname.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Circle Mappers
// ============================================================================

/// Circle together with the viewer's membership
#[derive(Debug, Clone)]
pub struct CircleForViewer {
    pub circle: Circle,
    pub is_joined: bool,
}

impl From<CircleForViewer> for CircleResponse {
    fn from(view: CircleForViewer) -> Self {
        let CircleForViewer { circle, is_joined } = view;
        Self {
            id: circle.id.to_string(),
            name: circle.name,
            description: circle.description,
            member_count: circle.member_count,
            created_at: circle.created_at,
            is_joined,
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

/// Comment with its author and the viewer's reaction
#[derive(Debug, Clone)]
pub struct CommentWithDetails {
    pub comment: Comment,
    pub author: Option<User>,
    pub user_reaction: Option<ReactionKind>,
}

impl From<CommentWithDetails> for CommentResponse {
    fn from(details: CommentWithDetails) -> Self {
        let CommentWithDetails {
            comment,
            author,
            user_reaction,
        } = details;
        Self {
            id: comment.id.to_string(),
            murmur_id: comment.murmur_id.to_string(),
            author_id: comment.author_id.to_string(),
            author: author.map(UserResponse::from),
            content: comment.content,
            created_at: comment.created_at,
            like_count: comment.counts.like_count,
            dislike_count: comment.counts.dislike_count,
            user_reaction,
        }
    }
}

// ============================================================================
// Murmur Mappers
// ============================================================================

/// Murmur with author, loaded comments and the viewer's reaction
#[derive(Debug, Clone)]
pub struct MurmurWithDetails {
    pub murmur: Murmur,
    pub author: Option<User>,
    /// Newest first
    pub comments: Vec<CommentWithDetails>,
    pub user_reaction: Option<ReactionKind>,
}

impl From<MurmurWithDetails> for MurmurResponse {
    fn from(details: MurmurWithDetails) -> Self {
        let MurmurWithDetails {
            murmur,
            author,
            comments,
            user_reaction,
        } = details;
        let comments: Vec<CommentResponse> =
            comments.into_iter().map(CommentResponse::from).collect();
        Self {
            id: murmur.id.to_string(),
            circle_id: murmur.circle_id.to_string(),
            author_id: murmur.author_id.to_string(),
            author: author.map(UserResponse::from),
            content: murmur.content,
            created_at: murmur.created_at,
            like_count: murmur.counts.like_count,
            dislike_count: murmur.counts.dislike_count,
            comment_count: comments.len(),
            user_reaction,
            comments,
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<ReactionCounts> for ReactionCountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            like_count: counts.like_count,
            dislike_count: counts.dislike_count,
        }
    }
}
