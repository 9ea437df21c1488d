//! # murmur-client
//!
//! Data-access layer of the Murmur feed: four resource clients (circles,
//! murmurs, comments, reactions) behind one facade. Every operation resolves
//! to an [`ApiResponse`] envelope; failures never escape as `Err` or panics.
//!
//! ```rust,ignore
//! use murmur_client::{dto::JoinCircleRequest, MurmurApi};
//! use murmur_store::MemoryStore;
//!
//! let api = MurmurApi::connect(MemoryStore::seeded(), "0x1234567890abcdef").await?;
//! let joined = api.circles().join_circle(JoinCircleRequest::new("1")).await;
//! if joined.success { /* ... */ }
//! ```

pub mod api;
pub mod clients;
pub mod dto;

pub use api::MurmurApi;
pub use clients::{
    CircleClient, ClientContext, ClientContextBuilder, ClientError, ClientResult, CommentClient,
    MurmurClient, ReactionClient,
};
pub use dto::{ApiResponse, Page};
