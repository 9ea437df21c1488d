//! In-memory implementation of MurmurRepository

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use murmur_core::{Comment, EntityId, Murmur, MurmurRepository, RepoResult};

use super::error::{already_exists, circle_not_found, murmur_not_found};
use crate::MemoryStore;

/// In-memory implementation of MurmurRepository
#[derive(Clone)]
pub struct MemMurmurRepository {
    store: MemoryStore,
}

impl MemMurmurRepository {
    /// Create a new MemMurmurRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MurmurRepository for MemMurmurRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Murmur>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| t.murmurs.get(id).cloned()))
    }

    #[instrument(skip(self))]
    async fn find_by_circle(&self, circle_id: EntityId) -> RepoResult<Vec<Murmur>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            t.murmurs
                .iter()
                .filter(|m| m.circle_id == circle_id)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, murmur), fields(murmur_id = %murmur.id, circle_id = %murmur.circle_id))]
    async fn create(&self, murmur: &Murmur) -> RepoResult<()> {
        self.store.round_trip().await?;
        self.store.write(|t| {
            if !t.circles.contains(murmur.circle_id) {
                return Err(circle_not_found(murmur.circle_id));
            }
            if t.murmurs.insert(murmur.id, murmur.clone()) {
                Ok(())
            } else {
                Err(already_exists(murmur.id))
            }
        })?;
        debug!("Murmur stored");
        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, murmur_id = %comment.murmur_id))]
    async fn add_comment(&self, comment: &Comment) -> RepoResult<Murmur> {
        self.store.round_trip().await?;
        let murmur = self.store.write(|t| -> RepoResult<Murmur> {
            let murmur = t
                .murmurs
                .get_mut(comment.murmur_id)
                .ok_or_else(|| murmur_not_found(comment.murmur_id))?;
            if !t.comments.insert(comment.id, comment.clone()) {
                return Err(already_exists(comment.id));
            }
            murmur.attach_comment(comment.id);
            Ok(murmur.clone())
        })?;
        info!(
            murmur_id = %murmur.id,
            comment_id = %comment.id,
            comment_count = murmur.comment_count(),
            "Comment added"
        );
        Ok(murmur)
    }
}
