//! Resource clients
//!
//! One client per resource, each borrowing the shared [`ClientContext`].
//! Public methods always resolve to an `ApiResponse`.

pub mod circle;
pub mod comment;
pub mod context;
pub mod error;
pub(crate) mod hydrate;
pub mod murmur;
pub mod reaction;

pub use circle::CircleClient;
pub use comment::CommentClient;
pub use context::{ClientContext, ClientContextBuilder};
pub use error::{ClientError, ClientResult};
pub use murmur::MurmurClient;
pub use reaction::ReactionClient;
