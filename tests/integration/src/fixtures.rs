//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use murmur_client::dto::{CreateCircleRequest, CreateCommentRequest, CreateMurmurRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A wallet address no other test uses
pub fn unique_address() -> String {
    format!("0xfeed{:012x}", unique_suffix())
}

/// Seeded circle the default viewer has not joined
pub const UNJOINED_CIRCLE_ID: &str = "1";
/// Seeded circle the default viewer has joined
pub const JOINED_CIRCLE_ID: &str = "2";
/// Member count of the unjoined seeded circle
pub const UNJOINED_CIRCLE_MEMBERS: u64 = 89;

pub fn circle_request() -> CreateCircleRequest {
    CreateCircleRequest {
        name: format!("测试圈{}", unique_suffix()),
        description: Some("integration test circle".to_string()),
    }
}

pub fn murmur_request(circle_id: &str) -> CreateMurmurRequest {
    CreateMurmurRequest::new(circle_id, format!("murmur #{}", unique_suffix()))
}

pub fn comment_request(murmur_id: &str) -> CreateCommentRequest {
    CreateCommentRequest::new(murmur_id, format!("comment #{}", unique_suffix()))
}
