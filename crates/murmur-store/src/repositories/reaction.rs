//! In-memory implementation of ReactionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{info, instrument};

use murmur_core::{
    DomainError, EntityId, ReactionCounts, ReactionDelta, ReactionKind, ReactionRepository,
    ReactionTarget, RepoResult, TargetType,
};

use crate::memory::Tables;
use crate::MemoryStore;

/// In-memory implementation of ReactionRepository
#[derive(Clone)]
pub struct MemReactionRepository {
    store: MemoryStore,
}

impl MemReactionRepository {
    /// Create a new MemReactionRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

/// Counters of the reaction target, if it exists
fn counts_mut(tables: &mut Tables, target: ReactionTarget) -> Option<&mut ReactionCounts> {
    match target.target_type {
        TargetType::Murmur => tables.murmurs.get_mut(target.id).map(|m| &mut m.counts),
        TargetType::Comment => tables.comments.get_mut(target.id).map(|c| &mut c.counts),
    }
}

#[async_trait]
impl ReactionRepository for MemReactionRepository {
    #[instrument(skip(self, targets), fields(count = targets.len()))]
    async fn find_many(
        &self,
        viewer_id: EntityId,
        targets: &[ReactionTarget],
    ) -> RepoResult<HashMap<ReactionTarget, ReactionKind>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            targets
                .iter()
                .filter_map(|target| {
                    t.reactions
                        .get(&(viewer_id, *target))
                        .map(|kind| (*target, *kind))
                })
                .collect()
        }))
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn apply(
        &self,
        viewer_id: EntityId,
        target: ReactionTarget,
        reaction: Option<ReactionKind>,
    ) -> RepoResult<ReactionCounts> {
        self.store.round_trip().await?;
        let (previous, counts) = self.store.write(|t| -> RepoResult<_> {
            let previous = t.reactions.get(&(viewer_id, target)).copied();
            let counts = counts_mut(t, target).ok_or(DomainError::TargetNotFound(target))?;
            counts.apply(ReactionDelta::transition(previous, reaction));
            let counts = *counts;

            match reaction {
                Some(kind) => t.reactions.insert((viewer_id, target), kind),
                None => t.reactions.remove(&(viewer_id, target)),
            };
            Ok((previous, counts))
        })?;
        info!(
            %viewer_id,
            from = ?previous,
            to = ?reaction,
            like_count = counts.like_count,
            dislike_count = counts.dislike_count,
            "Reaction applied"
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SEED_VIEWER_ID;

    const LIKE: Option<ReactionKind> = Some(ReactionKind::Like);
    const DISLIKE: Option<ReactionKind> = Some(ReactionKind::Dislike);

    fn repo() -> MemReactionRepository {
        MemReactionRepository::new(MemoryStore::seeded())
    }

    async fn active(
        repo: &MemReactionRepository,
        viewer_id: EntityId,
        target: ReactionTarget,
    ) -> Option<ReactionKind> {
        repo.find_many(viewer_id, &[target])
            .await
            .unwrap()
            .remove(&target)
    }

    #[tokio::test]
    async fn test_like_from_none() {
        let repo = repo();
        // murmur 2: 28 likes, 1 dislike, viewer has no reaction
        let target = ReactionTarget::murmur(EntityId::new(2));
        let counts = repo.apply(SEED_VIEWER_ID, target, LIKE).await.unwrap();
        assert_eq!(counts, ReactionCounts::new(29, 1));
        assert_eq!(active(&repo, SEED_VIEWER_ID, target).await, LIKE);
    }

    #[tokio::test]
    async fn test_switch_like_to_dislike() {
        let repo = repo();
        // murmur 1: 15 likes, 2 dislikes, viewer likes it
        let target = ReactionTarget::murmur(EntityId::new(1));
        let counts = repo.apply(SEED_VIEWER_ID, target, DISLIKE).await.unwrap();
        assert_eq!(counts, ReactionCounts::new(14, 3));
    }

    #[tokio::test]
    async fn test_clear_reaction() {
        let repo = repo();
        // murmur 3: 42 likes, 5 dislikes, viewer dislikes it
        let target = ReactionTarget::murmur(EntityId::new(3));
        let counts = repo.apply(SEED_VIEWER_ID, target, None).await.unwrap();
        assert_eq!(counts, ReactionCounts::new(42, 4));
        assert_eq!(active(&repo, SEED_VIEWER_ID, target).await, None);
    }

    #[tokio::test]
    async fn test_repeating_a_reaction_is_a_noop() {
        let repo = repo();
        let target = ReactionTarget::comment(EntityId::new(4));
        let first = repo.apply(SEED_VIEWER_ID, target, LIKE).await.unwrap();
        let second = repo.apply(SEED_VIEWER_ID, target, LIKE).await.unwrap();
        assert_eq!(first, ReactionCounts::new(12, 2));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_viewers_are_independent() {
        let repo = repo();
        let target = ReactionTarget::comment(EntityId::new(2));
        repo.apply(SEED_VIEWER_ID, target, LIKE).await.unwrap();
        let counts = repo
            .apply(EntityId::new(2), target, LIKE)
            .await
            .unwrap();
        assert_eq!(counts, ReactionCounts::new(10, 1));
        assert_eq!(active(&repo, EntityId::new(3), target).await, None);
    }

    #[tokio::test]
    async fn test_unknown_target() {
        let err = repo()
            .apply(SEED_VIEWER_ID, ReactionTarget::comment(EntityId::new(404)), LIKE)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::TargetNotFound(_)));
    }

    #[tokio::test]
    async fn test_find_many() {
        let targets = [
            ReactionTarget::murmur(EntityId::new(1)),
            ReactionTarget::murmur(EntityId::new(2)),
            ReactionTarget::comment(EntityId::new(1)),
        ];
        let found = repo().find_many(SEED_VIEWER_ID, &targets).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found.get(&targets[0]), Some(&ReactionKind::Like));
        assert!(!found.contains_key(&targets[1]));
    }
}
