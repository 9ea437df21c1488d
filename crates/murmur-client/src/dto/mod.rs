//! Data transfer objects for client requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for client inputs
//! - Response DTOs and the `ApiResponse` / `Page` envelopes
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCircleRequest, CreateCommentRequest, CreateMurmurRequest, JoinCircleRequest,
    PageRequest, ReactionRequest, SearchCirclesRequest, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};

pub use responses::{
    ApiResponse, CircleResponse, CommentResponse, MurmurResponse, Page, ReactionCountsResponse,
    UserResponse,
};

pub use mappers::{CircleForViewer, CommentWithDetails, MurmurWithDetails};
