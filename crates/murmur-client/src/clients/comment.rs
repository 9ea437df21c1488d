//! Comment client
//!
//! Handles reading and writing comments on murmurs. Creating a comment does
//! not attach it to its murmur; see `MurmurApi::post_comment`.

use murmur_core::{normalize_content, Comment};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ApiResponse, CommentResponse, CommentWithDetails, CreateCommentRequest};

use super::context::ClientContext;
use super::error::{parse_id, respond, ClientError, ClientResult};
use super::hydrate;

/// Comment client
pub struct CommentClient<'a> {
    ctx: &'a ClientContext,
}

impl<'a> CommentClient<'a> {
    /// Create a new CommentClient
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Comments on a murmur, newest first
    #[instrument(skip(self))]
    pub async fn get_comments_by_murmur_id(
        &self,
        murmur_id: &str,
    ) -> ApiResponse<Vec<CommentResponse>> {
        respond("get_comments_by_murmur_id", self.by_murmur(murmur_id).await)
    }

    /// Write a comment as the viewer
    #[instrument(skip(self, request), fields(murmur_id = %request.murmur_id))]
    pub async fn create_comment(
        &self,
        request: CreateCommentRequest,
    ) -> ApiResponse<CommentResponse> {
        let result = self.create(request).await.map(|comment| {
            CommentResponse::from(CommentWithDetails {
                comment,
                author: Some(self.ctx.viewer().clone()),
                user_reaction: None,
            })
        });
        respond("create_comment", result)
    }

    // === Operations ===

    async fn by_murmur(&self, raw_id: &str) -> ClientResult<Vec<CommentResponse>> {
        let murmur_id = parse_id(raw_id)?;
        if self.ctx.murmur_repo().find_by_id(murmur_id).await?.is_none() {
            return Err(ClientError::not_found("Murmur", murmur_id));
        }

        let mut comments = self.ctx.comment_repo().find_by_murmur(murmur_id).await?;
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let hydrated = hydrate::comments(self.ctx, comments).await?;
        Ok(hydrated.into_iter().map(CommentResponse::from).collect())
    }

    /// Validate a request and build the viewer's comment without any round-trip
    pub(crate) fn prepare(&self, request: CreateCommentRequest) -> ClientResult<Comment> {
        request.validate()?;
        let murmur_id = parse_id(&request.murmur_id)?;
        let content = normalize_content(&request.content, self.ctx.limits().max_comment_length)?;
        Ok(Comment::new(
            self.ctx.generate_id(),
            murmur_id,
            self.ctx.viewer_id(),
            content,
        ))
    }

    /// Store a new comment without attaching it to its murmur
    async fn create(&self, request: CreateCommentRequest) -> ClientResult<Comment> {
        let comment = self.prepare(request)?;
        let murmur_id = comment.murmur_id;

        if self.ctx.murmur_repo().find_by_id(murmur_id).await?.is_none() {
            return Err(ClientError::not_found("Murmur", murmur_id));
        }
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            murmur_id = %murmur_id,
            author_id = %comment.author_id,
            "Comment created"
        );
        Ok(comment)
    }
}
