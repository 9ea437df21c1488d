//! # murmur-store
//!
//! In-memory data source implementing every repository trait from
//! `murmur-core`, plus the fixture dataset the application starts with.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use murmur_common::StoreConfig;
//! use murmur_store::MemoryStore;
//!
//! let store = MemoryStore::from_config(&StoreConfig::default());
//! // hand `store.clone()` to anything that needs a repository
//! ```
//!
//! Each `MemoryStore` is an isolated dataset; clones share it.

pub mod memory;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use seed::{SEED_VIEWER_ADDRESS, SEED_VIEWER_ID};
pub use repositories::{
    MemCircleRepository, MemCommentRepository, MemMurmurRepository, MemReactionRepository,
    MemUserRepository,
};
