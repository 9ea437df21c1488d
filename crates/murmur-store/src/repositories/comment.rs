//! In-memory implementation of CommentRepository

use async_trait::async_trait;
use tracing::{debug, instrument};

use murmur_core::{Comment, CommentRepository, EntityId, RepoResult};

use super::error::{already_exists, murmur_not_found};
use crate::MemoryStore;

/// In-memory implementation of CommentRepository
#[derive(Clone)]
pub struct MemCommentRepository {
    store: MemoryStore,
}

impl MemCommentRepository {
    /// Create a new MemCommentRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for MemCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Comment>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| t.comments.get(id).cloned()))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[EntityId]) -> RepoResult<Vec<Comment>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            ids.iter()
                .filter_map(|id| t.comments.get(*id).cloned())
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn find_by_murmur(&self, murmur_id: EntityId) -> RepoResult<Vec<Comment>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            t.comments
                .iter()
                .filter(|c| c.murmur_id == murmur_id)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, murmur_id = %comment.murmur_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.store.round_trip().await?;
        self.store.write(|t| {
            if !t.murmurs.contains(comment.murmur_id) {
                return Err(murmur_not_found(comment.murmur_id));
            }
            if t.comments.insert(comment.id, comment.clone()) {
                Ok(())
            } else {
                Err(already_exists(comment.id))
            }
        })?;
        debug!("Comment stored");
        Ok(())
    }
}
