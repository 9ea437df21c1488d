//! Reaction client
//!
//! Moves the viewer between `none`, `like` and `dislike` on a murmur or
//! comment and reports the target's new counters.

use murmur_core::{ReactionTarget, TargetType};
use tracing::instrument;
use validator::Validate;

use crate::dto::{ApiResponse, ReactionCountsResponse, ReactionRequest};

use super::context::ClientContext;
use super::error::{parse_id, respond, ClientError, ClientResult};

/// Reaction client
pub struct ReactionClient<'a> {
    ctx: &'a ClientContext,
}

impl<'a> ReactionClient<'a> {
    /// Create a new ReactionClient
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Set (or clear, with `reaction: None`) the viewer's reaction
    #[instrument(skip(self))]
    pub async fn set_reaction(&self, request: ReactionRequest) -> ApiResponse<ReactionCountsResponse> {
        respond("set_reaction", self.apply(request).await)
    }

    async fn apply(&self, request: ReactionRequest) -> ClientResult<ReactionCountsResponse> {
        request.validate()?;
        let id = parse_id(&request.target_id)?;
        let target = match request.target_type {
            TargetType::Murmur => ReactionTarget::murmur(id),
            TargetType::Comment => ReactionTarget::comment(id),
        };

        let counts = self
            .ctx
            .reaction_repo()
            .apply(self.ctx.viewer_id(), target, request.reaction)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    let resource = match target.target_type {
                        TargetType::Murmur => "Murmur",
                        TargetType::Comment => "Comment",
                    };
                    ClientError::not_found(resource, id)
                } else {
                    ClientError::from(e)
                }
            })?;
        Ok(counts.into())
    }
}
