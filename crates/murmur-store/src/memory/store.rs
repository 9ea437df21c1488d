//! Shared in-memory dataset
//!
//! All tables sit behind one `RwLock`, so every repository call observes and
//! produces a consistent snapshot. The lock is never held across an `.await`:
//! simulated latency is awaited first, then the lock is taken and released
//! within the same synchronous block.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use murmur_common::StoreConfig;
use murmur_core::{
    Circle, Comment, DomainError, EntityId, IdGenerator, Murmur, ReactionKind, ReactionTarget,
    RepoResult, User,
};
use parking_lot::RwLock;
use tracing::{debug, info};

use super::Table;
use crate::seed;

/// Every table of the dataset
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: Table<User>,
    pub(crate) addresses: HashMap<String, EntityId>,
    pub(crate) circles: Table<Circle>,
    /// (circle, viewer)
    pub(crate) memberships: HashSet<(EntityId, EntityId)>,
    pub(crate) murmurs: Table<Murmur>,
    pub(crate) comments: Table<Comment>,
    /// (viewer, target) -> active reaction
    pub(crate) reactions: HashMap<(EntityId, ReactionTarget), ReactionKind>,
}

struct Inner {
    tables: RwLock<Tables>,
    ids: Arc<IdGenerator>,
    latency: Duration,
    offline: AtomicBool,
}

/// In-memory implementation of every repository trait
///
/// Cloning is cheap and yields a handle to the same dataset.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store with no simulated latency
    pub fn new() -> Self {
        Self::with_tables(Tables::default(), Duration::ZERO)
    }

    /// Create a store preloaded with the fixture dataset
    pub fn seeded() -> Self {
        Self::with_tables(seed::tables(), Duration::ZERO)
    }

    /// Create a store as described by the configuration
    pub fn from_config(config: &StoreConfig) -> Self {
        let tables = if config.seed {
            seed::tables()
        } else {
            Tables::default()
        };
        info!(
            seed = config.seed,
            latency_ms = config.latency_ms,
            "In-memory store created"
        );
        Self::with_tables(tables, config.latency())
    }

    /// Create a store preloaded with the fixture dataset that delays every
    /// call by `latency` to mimic a network round-trip
    pub fn seeded_with_latency(latency: Duration) -> Self {
        Self::with_tables(seed::tables(), latency)
    }

    fn with_tables(tables: Tables, latency: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                tables: RwLock::new(tables),
                ids: Arc::new(IdGenerator::default()),
                latency,
                offline: AtomicBool::new(false),
            }),
        }
    }

    /// Id generator shared by every session on this dataset
    pub fn id_generator(&self) -> Arc<IdGenerator> {
        Arc::clone(&self.inner.ids)
    }

    /// Simulate losing (or regaining) the connection to the data source
    ///
    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.store(offline, Ordering::SeqCst);
        info!(offline, "Store connectivity changed");
    }

    pub fn is_offline(&self) -> bool {
        self.inner.offline.load(Ordering::SeqCst)
    }

    /// Suspension point standing in for the transport
    pub(crate) async fn round_trip(&self) -> RepoResult<()> {
        if !self.inner.latency.is_zero() {
            tokio::time::sleep(self.inner.latency).await;
        }
        if self.is_offline() {
            debug!("Rejecting call, store is offline");
            return Err(DomainError::TransportError("data source unreachable".to_string()));
        }
        Ok(())
    }

    /// Run a read-only closure against the tables
    pub(crate) fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
        f(&self.inner.tables.read())
    }

    /// Run a mutating closure against the tables as one atomic step
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        f(&mut self.inner.tables.write())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.inner.tables.read();
        f.debug_struct("MemoryStore")
            .field("users", &tables.users.len())
            .field("circles", &tables.circles.len())
            .field("murmurs", &tables.murmurs.len())
            .field("comments", &tables.comments.len())
            .field("latency", &self.inner.latency)
            .field("offline", &self.is_offline())
            .finish()
    }
}
