//! Murmur client
//!
//! Handles reading and posting murmurs within a circle.

use murmur_core::{normalize_content, Murmur};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{ApiResponse, CreateMurmurRequest, MurmurResponse, MurmurWithDetails};

use super::context::ClientContext;
use super::error::{parse_id, respond, ClientError, ClientResult};
use super::hydrate;

/// Murmur client
pub struct MurmurClient<'a> {
    ctx: &'a ClientContext,
}

impl<'a> MurmurClient<'a> {
    /// Create a new MurmurClient
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Murmurs of a circle, newest first
    #[instrument(skip(self))]
    pub async fn get_murmurs_by_circle_id(
        &self,
        circle_id: &str,
    ) -> ApiResponse<Vec<MurmurResponse>> {
        respond("get_murmurs_by_circle_id", self.by_circle(circle_id).await)
    }

    /// Post a murmur into a circle as the viewer
    #[instrument(skip(self, request), fields(circle_id = %request.circle_id))]
    pub async fn create_murmur(&self, request: CreateMurmurRequest) -> ApiResponse<MurmurResponse> {
        let result = self.create(request).await.map(|murmur| {
            MurmurResponse::from(MurmurWithDetails {
                murmur,
                author: Some(self.ctx.viewer().clone()),
                comments: Vec::new(),
                user_reaction: None,
            })
        });
        respond("create_murmur", result)
    }

    /// Look up one murmur with its comments
    #[instrument(skip(self))]
    pub async fn get_murmur_by_id(&self, id: &str) -> ApiResponse<MurmurResponse> {
        respond("get_murmur_by_id", self.find(id).await)
    }

    // === Operations ===

    async fn by_circle(&self, raw_id: &str) -> ClientResult<Vec<MurmurResponse>> {
        let circle_id = parse_id(raw_id)?;
        if self.ctx.circle_repo().find_by_id(circle_id).await?.is_none() {
            return Err(ClientError::not_found("Circle", circle_id));
        }

        let mut murmurs = self.ctx.murmur_repo().find_by_circle(circle_id).await?;
        murmurs.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        debug!(count = murmurs.len(), "Loaded circle murmurs");

        let hydrated = hydrate::murmurs(self.ctx, murmurs).await?;
        Ok(hydrated.into_iter().map(MurmurResponse::from).collect())
    }

    /// Store a new murmur; validation happens before any round-trip
    pub(crate) async fn create(&self, request: CreateMurmurRequest) -> ClientResult<Murmur> {
        request.validate()?;
        let circle_id = parse_id(&request.circle_id)?;
        let content = normalize_content(&request.content, self.ctx.limits().max_murmur_length)?;

        if self.ctx.circle_repo().find_by_id(circle_id).await?.is_none() {
            return Err(ClientError::not_found("Circle", circle_id));
        }

        let murmur = Murmur::new(
            self.ctx.generate_id(),
            circle_id,
            self.ctx.viewer_id(),
            content,
        );
        self.ctx.murmur_repo().create(&murmur).await?;

        info!(
            murmur_id = %murmur.id,
            circle_id = %circle_id,
            author_id = %murmur.author_id,
            "Murmur created"
        );
        Ok(murmur)
    }

    async fn find(&self, raw_id: &str) -> ClientResult<MurmurResponse> {
        let id = parse_id(raw_id)?;
        let murmur = self
            .ctx
            .murmur_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Murmur", id))?;
        Ok(hydrate::murmur(self.ctx, murmur).await?.into())
    }
}
