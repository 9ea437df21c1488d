//! Data-access facade
//!
//! `MurmurApi` is bound to one viewer session and hands out the four
//! resource clients. It also hosts operations that span resources.

use std::sync::Arc;

use murmur_common::{AppConfig, AppError, ConfigError};
use murmur_core::{DomainError, IdGenerator};
use murmur_store::MemoryStore;
use tracing::{info, instrument};

use crate::clients::error::respond;
use crate::clients::{
    CircleClient, ClientContext, ClientError, ClientResult, CommentClient, MurmurClient,
    ReactionClient,
};
use crate::dto::{ApiResponse, CreateCommentRequest, MurmurResponse, UserResponse};

/// Entry point of the data-access layer
#[derive(Debug, Clone)]
pub struct MurmurApi {
    ctx: ClientContext,
}

impl MurmurApi {
    pub fn new(ctx: ClientContext) -> Self {
        Self { ctx }
    }

    /// Connect to an in-memory store as the wallet `address`
    ///
    /// Unknown addresses are registered as new users.
    pub async fn connect(store: MemoryStore, address: &str) -> ClientResult<Self> {
        let ctx = ClientContext::builder()
            .memory_store(store)
            .connect(address)
            .await?;
        Ok(Self::new(ctx))
    }

    /// Build the store, id generator, limits and session from configuration
    #[instrument(skip(config), fields(app = %config.app.name))]
    pub async fn from_config(config: &AppConfig) -> ClientResult<Self> {
        let generator = IdGenerator::new(config.store.worker_id).map_err(|e| {
            AppError::from(ConfigError::InvalidValue("MURMUR_WORKER_ID", e.to_string()))
        })?;
        let ctx = ClientContext::builder()
            .memory_store(MemoryStore::from_config(&config.store))
            .id_generator(Arc::new(generator))
            .limits(config.limits.clone())
            .connect(&config.session.viewer_address)
            .await?;
        info!(
            viewer_id = %ctx.viewer_id(),
            viewer = %ctx.viewer().display_name(),
            env = ?config.app.env,
            "Murmur API ready"
        );
        Ok(Self::new(ctx))
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }

    /// The connected viewer's profile
    pub fn viewer(&self) -> UserResponse {
        UserResponse::from(self.ctx.viewer())
    }

    pub fn circles(&self) -> CircleClient<'_> {
        CircleClient::new(&self.ctx)
    }

    pub fn murmurs(&self) -> MurmurClient<'_> {
        MurmurClient::new(&self.ctx)
    }

    pub fn comments(&self) -> CommentClient<'_> {
        CommentClient::new(&self.ctx)
    }

    pub fn reactions(&self) -> ReactionClient<'_> {
        ReactionClient::new(&self.ctx)
    }

    /// Create a comment and attach it to its murmur as the newest one
    ///
    /// Returns the updated murmur, whose `commentCount` includes the new comment.
    #[instrument(skip(self, request), fields(murmur_id = %request.murmur_id))]
    pub async fn post_comment(&self, request: CreateCommentRequest) -> ApiResponse<MurmurResponse> {
        respond("post_comment", self.create_and_attach(request).await)
    }

    async fn create_and_attach(&self, request: CreateCommentRequest) -> ClientResult<MurmurResponse> {
        let comment = self.comments().prepare(request)?;
        let murmur = match self.ctx.murmur_repo().add_comment(&comment).await {
            Ok(murmur) => murmur,
            Err(DomainError::MurmurNotFound(id)) => return Err(ClientError::not_found("Murmur", id)),
            Err(e) => return Err(e.into()),
        };
        let details = crate::clients::hydrate::murmur(&self.ctx, murmur).await?;
        Ok(details.into())
    }
}
