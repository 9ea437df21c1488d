//! Repository implementations
//!
//! In-memory implementations of the repository traits defined in murmur-core.
//! Every repository is a thin handle over a shared [`MemoryStore`]; each call
//! pays one simulated round-trip and then touches the tables under the lock.
//!
//! [`MemoryStore`]: crate::MemoryStore

mod circle;
mod comment;
mod error;
mod murmur;
mod reaction;
mod user;

pub use circle::MemCircleRepository;
pub use comment::MemCommentRepository;
pub use murmur::MemMurmurRepository;
pub use reaction::MemReactionRepository;
pub use user::MemUserRepository;
