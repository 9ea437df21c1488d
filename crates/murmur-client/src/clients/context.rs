//! Client context - dependency container for clients
//!
//! Holds the repositories, the id generator, content limits and the viewer
//! the session is bound to.

use std::sync::Arc;

use murmur_common::LimitsConfig;
use murmur_core::{
    CircleRepository, CommentRepository, EntityId, IdGenerator, MurmurRepository,
    ReactionRepository, User, UserRepository,
};
use murmur_store::{
    MemCircleRepository, MemCommentRepository, MemMurmurRepository, MemReactionRepository,
    MemUserRepository, MemoryStore,
};
use tracing::{info, instrument};

use super::error::{ClientError, ClientResult};

/// Client context containing all dependencies
///
/// Cloning is cheap; clones share repositories and the id generator.
#[derive(Clone)]
pub struct ClientContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    circle_repo: Arc<dyn CircleRepository>,
    murmur_repo: Arc<dyn MurmurRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    id_generator: Arc<IdGenerator>,
    limits: LimitsConfig,

    // Session
    viewer: User,
}

impl ClientContext {
    pub fn builder() -> ClientContextBuilder {
        ClientContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the circle repository
    pub fn circle_repo(&self) -> &dyn CircleRepository {
        self.circle_repo.as_ref()
    }

    /// Get the murmur repository
    pub fn murmur_repo(&self) -> &dyn MurmurRepository {
        self.murmur_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Session ===

    /// The connected viewer
    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    pub fn viewer_id(&self) -> EntityId {
        self.viewer.id
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Generate a new entity id
    pub fn generate_id(&self) -> EntityId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("repositories", &"...")
            .field("worker_id", &self.id_generator.worker_id())
            .field("limits", &self.limits)
            .field("viewer", &self.viewer.id)
            .finish()
    }
}

/// Builder for creating ClientContext with custom configuration
#[derive(Default)]
pub struct ClientContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    circle_repo: Option<Arc<dyn CircleRepository>>,
    murmur_repo: Option<Arc<dyn MurmurRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    id_generator: Option<Arc<IdGenerator>>,
    limits: Option<LimitsConfig>,
    viewer: Option<User>,
}

impl ClientContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one in-memory store for every repository and its id generator
    pub fn memory_store(self, store: MemoryStore) -> Self {
        self.id_generator(store.id_generator())
            .user_repo(Arc::new(MemUserRepository::new(store.clone())))
            .circle_repo(Arc::new(MemCircleRepository::new(store.clone())))
            .murmur_repo(Arc::new(MemMurmurRepository::new(store.clone())))
            .comment_repo(Arc::new(MemCommentRepository::new(store.clone())))
            .reaction_repo(Arc::new(MemReactionRepository::new(store)))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn circle_repo(mut self, repo: Arc<dyn CircleRepository>) -> Self {
        self.circle_repo = Some(repo);
        self
    }

    pub fn murmur_repo(mut self, repo: Arc<dyn MurmurRepository>) -> Self {
        self.murmur_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Bind the context to an already-resolved viewer
    pub fn viewer(mut self, viewer: User) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Resolve the viewer by wallet address, registering it on first sight, then build
    #[instrument(skip(self))]
    pub async fn connect(mut self, address: &str) -> ClientResult<ClientContext> {
        let address = User::normalize_address(address)?;
        let user_repo = self
            .user_repo
            .clone()
            .ok_or_else(|| ClientError::internal("user_repo is required"))?;

        let viewer = match user_repo.find_by_address(&address).await? {
            Some(user) => user,
            None => {
                let generator = self
                    .id_generator
                    .get_or_insert_with(|| Arc::new(IdGenerator::default()));
                let candidate = User::new(generator.generate(), address);
                let user = user_repo.find_or_create(&candidate).await?;
                if user.id == candidate.id {
                    info!(user_id = %user.id, address = %user.address, "Registered new viewer");
                }
                user
            }
        };

        self.viewer(viewer).build()
    }

    /// Build the ClientContext
    ///
    /// # Errors
    /// Returns `ClientError::Internal` if any required dependency is missing
    pub fn build(self) -> ClientResult<ClientContext> {
        Ok(ClientContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ClientError::internal("user_repo is required"))?,
            circle_repo: self
                .circle_repo
                .ok_or_else(|| ClientError::internal("circle_repo is required"))?,
            murmur_repo: self
                .murmur_repo
                .ok_or_else(|| ClientError::internal("murmur_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ClientError::internal("comment_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ClientError::internal("reaction_repo is required"))?,
            id_generator: self.id_generator.unwrap_or_default(),
            limits: self.limits.unwrap_or_default(),
            viewer: self
                .viewer
                .ok_or_else(|| ClientError::internal("viewer is required"))?,
        })
    }
}
