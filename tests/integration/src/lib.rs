//! Integration test utilities for the Murmur data-access layer
//!
//! This crate provides helpers for running end-to-end scenarios against
//! the client facade backed by an isolated in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
