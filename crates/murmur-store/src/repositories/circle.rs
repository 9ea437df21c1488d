//! In-memory implementation of CircleRepository

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use murmur_core::{Circle, CircleRepository, EntityId, MembershipChange, RepoResult};

use super::error::{already_exists, circle_not_found};
use crate::MemoryStore;

/// In-memory implementation of CircleRepository
#[derive(Clone)]
pub struct MemCircleRepository {
    store: MemoryStore,
}

impl MemCircleRepository {
    /// Create a new MemCircleRepository
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CircleRepository for MemCircleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Circle>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| t.circles.get(id).cloned()))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: usize, offset: usize) -> RepoResult<Vec<Circle>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            let mut circles: Vec<&Circle> = t.circles.iter().collect();
            circles.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
            circles
                .into_iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| t.circles.len() as u64))
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> RepoResult<Vec<Circle>> {
        self.store.round_trip().await?;
        let found: Vec<Circle> = self.store.read(|t| {
            t.circles
                .iter()
                .filter(|c| c.matches(query))
                .cloned()
                .collect()
        });
        debug!(hits = found.len(), "Circle search finished");
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn find_joined(&self, viewer_id: EntityId) -> RepoResult<Vec<Circle>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            t.circles
                .iter()
                .filter(|c| t.memberships.contains(&(c.id, viewer_id)))
                .cloned()
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn joined_ids(&self, viewer_id: EntityId) -> RepoResult<Vec<EntityId>> {
        self.store.round_trip().await?;
        Ok(self.store.read(|t| {
            t.memberships
                .iter()
                .filter(|(_, viewer)| *viewer == viewer_id)
                .map(|(circle, _)| *circle)
                .collect()
        }))
    }

    #[instrument(skip(self))]
    async fn is_member(&self, circle_id: EntityId, viewer_id: EntityId) -> RepoResult<bool> {
        self.store.round_trip().await?;
        Ok(self
            .store
            .read(|t| t.memberships.contains(&(circle_id, viewer_id))))
    }

    #[instrument(skip(self, circle), fields(circle_id = %circle.id))]
    async fn create_with_member(
        &self,
        circle: &Circle,
        creator_id: EntityId,
    ) -> RepoResult<Circle> {
        self.store.round_trip().await?;
        let created = self.store.write(|t| -> RepoResult<Circle> {
            let mut created = circle.clone();
            created.member_count = 0;
            created.add_member();
            if !t.circles.insert(created.id, created.clone()) {
                return Err(already_exists(created.id));
            }
            t.memberships.insert((created.id, creator_id));
            Ok(created)
        })?;
        info!(circle_id = %created.id, %creator_id, "Circle created");
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn add_member(
        &self,
        circle_id: EntityId,
        viewer_id: EntityId,
    ) -> RepoResult<MembershipChange> {
        self.store.round_trip().await?;
        let change = self.store.write(|t| -> RepoResult<MembershipChange> {
            let circle = t
                .circles
                .get_mut(circle_id)
                .ok_or_else(|| circle_not_found(circle_id))?;
            let changed = t.memberships.insert((circle_id, viewer_id));
            if changed {
                circle.add_member();
            }
            Ok(MembershipChange {
                circle: circle.clone(),
                changed,
            })
        })?;
        if change.changed {
            info!(
                %circle_id,
                %viewer_id,
                member_count = change.circle.member_count,
                "Viewer joined circle"
            );
        }
        Ok(change)
    }

    #[instrument(skip(self))]
    async fn remove_member(
        &self,
        circle_id: EntityId,
        viewer_id: EntityId,
    ) -> RepoResult<MembershipChange> {
        self.store.round_trip().await?;
        let change = self.store.write(|t| -> RepoResult<MembershipChange> {
            let circle = t
                .circles
                .get_mut(circle_id)
                .ok_or_else(|| circle_not_found(circle_id))?;
            let changed = t.memberships.remove(&(circle_id, viewer_id));
            if changed {
                circle.remove_member();
            }
            Ok(MembershipChange {
                circle: circle.clone(),
                changed,
            })
        })?;
        if change.changed {
            info!(
                %circle_id,
                %viewer_id,
                member_count = change.circle.member_count,
                "Viewer left circle"
            );
        }
        Ok(change)
    }
}
