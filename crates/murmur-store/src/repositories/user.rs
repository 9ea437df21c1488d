//! In-memory implementation of UserRepository

use async_trait::async_trait;
use tracing::{debug, instrument};

use murmur_core::{EntityId, RepoResult, User, UserRepository};

use super::error::already_exists;
use crate::MemoryStore;

/// In-memory implementation of UserRepository
#[derive(Clone)]
pub struct MemUserRepository {
    store: MemoryStore,
}

impl MemUserRepository {
    /// Create a new MemUserRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| t.users.get(id).cloned()))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<User>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            ids.iter()
                .filter_map(|id| t.users.get(*id).cloned())
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn find_by_address(&self, address: &str) -> RepoResult<Option<User>> {
        self.store.round_trip().await?;
        let key = address.to_lowercase();
        Ok(self.store.read(|t| {
            t.addresses
                .get(&key)
                .and_then(|id| t.users.get(*id).cloned())
        }))
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn find_or_create(&self, user: &User) -> RepoResult<User> {
        self.store.round_trip().await?;
        let key = user.address.to_lowercase();
        let (resolved, created) = self.store.write(|t| {
            if let Some(existing) = t.addresses.get(&key).and_then(|id| t.users.get(*id)) {
                return Ok((existing.clone(), false));
            }
            if !t.users.insert(user.id, user.clone()) {
                return Err(already_exists(user.id));
            }
            t.addresses.insert(key, user.id);
            Ok((user.clone(), true))
        })?;
        if created {
            debug!(address = %user.address, "User registered");
        }
        Ok(resolved)
    }
}
