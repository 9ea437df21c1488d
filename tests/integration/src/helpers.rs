//! Test helpers for integration tests
//!
//! Provides an isolated application per test and assertions over the
//! response envelope.

use std::fmt::Debug;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use murmur_client::{ApiResponse, MurmurApi};
use murmur_store::{MemoryStore, SEED_VIEWER_ADDRESS};
use serde::Serialize;

/// One isolated dataset plus a session bound to it
pub struct TestApp {
    pub store: MemoryStore,
    pub api: MurmurApi,
}

impl TestApp {
    /// Seeded store, connected as the seeded viewer
    pub async fn start() -> Result<Self> {
        Self::start_with_store(MemoryStore::seeded()).await
    }

    /// Seeded store with a simulated round-trip delay
    pub async fn start_with_latency(latency: Duration) -> Result<Self> {
        Self::start_with_store(MemoryStore::seeded_with_latency(latency)).await
    }

    pub async fn start_with_store(store: MemoryStore) -> Result<Self> {
        let api = MurmurApi::connect(store.clone(), SEED_VIEWER_ADDRESS).await?;
        Ok(Self { store, api })
    }

    /// Another session on the same dataset
    pub async fn session(&self, address: &str) -> Result<MurmurApi> {
        Ok(MurmurApi::connect(self.store.clone(), address).await?)
    }
}

/// Unwrap a successful envelope
pub fn assert_success<T: Debug>(response: ApiResponse<T>) -> Result<T> {
    if !response.success {
        bail!("expected success, got {:?}", response.error);
    }
    if response.error.is_some() {
        bail!("successful envelope carries an error: {response:?}");
    }
    response
        .data
        .ok_or_else(|| anyhow!("successful envelope without data"))
}

/// Check a failed envelope and return its error text
pub fn assert_failure<T: Debug>(response: ApiResponse<T>) -> Result<String> {
    if response.success {
        bail!("expected failure, got {:?}", response.data);
    }
    if response.data.is_some() || response.message.is_some() {
        bail!("failed envelope carries data or message: {response:?}");
    }
    response
        .error
        .ok_or_else(|| anyhow!("failed envelope without error text"))
}

/// Serialize anything to a JSON value
pub fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
