//! Circle client
//!
//! Handles circle discovery, membership and creation.

use std::collections::HashSet;

use chrono::Utc;
use murmur_core::{Circle, EntityId};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{
    ApiResponse, CircleForViewer, CircleResponse, CreateCircleRequest, JoinCircleRequest, Page,
    PageRequest, SearchCirclesRequest,
};

use super::context::ClientContext;
use super::error::{parse_id, respond, ClientError, ClientResult};

const ALREADY_MEMBER: &str = "already a member";
const NOT_A_MEMBER: &str = "not a member";

/// Circle client
pub struct CircleClient<'a> {
    ctx: &'a ClientContext,
}

impl<'a> CircleClient<'a> {
    /// Create a new CircleClient
    pub fn new(ctx: &'a ClientContext) -> Self {
        Self { ctx }
    }

    /// Circles the viewer has joined
    #[instrument(skip(self))]
    pub async fn get_joined_circles(&self) -> ApiResponse<Vec<CircleResponse>> {
        respond("get_joined_circles", self.joined().await)
    }

    /// Circles whose name or description contains the query
    #[instrument(skip(self))]
    pub async fn search_circles(
        &self,
        request: SearchCirclesRequest,
    ) -> ApiResponse<Vec<CircleResponse>> {
        respond("search_circles", self.search(&request.query).await)
    }

    /// Join a circle; repeating the call leaves the member count alone
    #[instrument(skip(self))]
    pub async fn join_circle(&self, request: JoinCircleRequest) -> ApiResponse<CircleResponse> {
        let result = self.change_membership(&request, true).await;
        Self::membership_response("join_circle", result, ALREADY_MEMBER)
    }

    /// Leave a circle; leaving a circle one is not in changes nothing
    #[instrument(skip(self))]
    pub async fn leave_circle(&self, request: JoinCircleRequest) -> ApiResponse<CircleResponse> {
        let result = self.change_membership(&request, false).await;
        Self::membership_response("leave_circle", result, NOT_A_MEMBER)
    }

    /// Look up one circle
    #[instrument(skip(self))]
    pub async fn get_circle_by_id(&self, id: &str) -> ApiResponse<CircleResponse> {
        respond("get_circle_by_id", self.find(id).await)
    }

    /// All circles, newest first
    #[instrument(skip(self))]
    pub async fn list_circles(&self, page: PageRequest) -> ApiResponse<Page<CircleResponse>> {
        respond("list_circles", self.list(page).await)
    }

    /// Create a circle; the creator becomes its first member
    #[instrument(skip(self))]
    pub async fn create_circle(&self, request: CreateCircleRequest) -> ApiResponse<CircleResponse> {
        respond("create_circle", self.create(request).await)
    }

    // === Operations ===

    async fn joined(&self) -> ClientResult<Vec<CircleResponse>> {
        let circles = self
            .ctx
            .circle_repo()
            .find_joined(self.ctx.viewer_id())
            .await?;
        debug!(count = circles.len(), "Loaded joined circles");
        Ok(circles
            .into_iter()
            .map(|circle| {
                CircleResponse::from(CircleForViewer {
                    circle,
                    is_joined: true,
                })
            })
            .collect())
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<CircleResponse>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let circles = self.ctx.circle_repo().search(query).await?;
        self.for_viewer(circles).await
    }

    async fn find(&self, raw_id: &str) -> ClientResult<CircleResponse> {
        let id = parse_id(raw_id)?;
        let circle = self
            .ctx
            .circle_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClientError::not_found("Circle", id))?;
        let is_joined = self
            .ctx
            .circle_repo()
            .is_member(id, self.ctx.viewer_id())
            .await?;
        Ok(CircleForViewer { circle, is_joined }.into())
    }

    async fn list(&self, page: PageRequest) -> ClientResult<Page<CircleResponse>> {
        let (limit, offset) = (page.limit(), page.offset());
        let circles = self.ctx.circle_repo().list(limit, offset).await?;
        let total = self.ctx.circle_repo().count().await?;
        let items = self.for_viewer(circles).await?;
        Ok(Page::new(items, total, limit, offset))
    }

    async fn create(&self, request: CreateCircleRequest) -> ClientResult<CircleResponse> {
        let request = request.trimmed();
        request.validate()?;

        let mut circle = Circle::new(self.ctx.generate_id(), request.name, request.description);
        circle.creator_id = Some(self.ctx.viewer_id());
        circle.created_at = Utc::now();
        let circle = self
            .ctx
            .circle_repo()
            .create_with_member(&circle, self.ctx.viewer_id())
            .await?;

        info!(circle_id = %circle.id, name = %circle.name, "Circle created");
        Ok(CircleForViewer {
            circle,
            is_joined: true,
        }
        .into())
    }

    async fn change_membership(
        &self,
        request: &JoinCircleRequest,
        join: bool,
    ) -> ClientResult<(CircleResponse, bool)> {
        request.validate()?;
        let id = parse_id(&request.circle_id)?;
        let viewer_id = self.ctx.viewer_id();
        let repo = self.ctx.circle_repo();

        let change = if join {
            repo.add_member(id, viewer_id).await
        } else {
            repo.remove_member(id, viewer_id).await
        };
        let change = change.map_err(|e| {
            if e.is_not_found() {
                ClientError::not_found("Circle", id)
            } else {
                ClientError::from(e)
            }
        })?;

        let response: CircleResponse = CircleForViewer {
            circle: change.circle,
            is_joined: join,
        }
        .into();
        Ok((response, change.changed))
    }

    fn membership_response(
        operation: &'static str,
        result: ClientResult<(CircleResponse, bool)>,
        unchanged_note: &str,
    ) -> ApiResponse<CircleResponse> {
        let unchanged = matches!(result, Ok((_, false)));
        let response = respond(operation, result.map(|(circle, _)| circle));
        if unchanged {
            response.with_message(unchanged_note)
        } else {
            response
        }
    }

    /// Attach the viewer's membership to each circle
    async fn for_viewer(&self, circles: Vec<Circle>) -> ClientResult<Vec<CircleResponse>> {
        if circles.is_empty() {
            return Ok(Vec::new());
        }
        let joined: HashSet<EntityId> = self
            .ctx
            .circle_repo()
            .joined_ids(self.ctx.viewer_id())
            .await?
            .into_iter()
            .collect();
        Ok(circles
            .into_iter()
            .map(|circle| {
                let is_joined = joined.contains(&circle.id);
                CircleForViewer { circle, is_joined }.into()
            })
            .collect())
    }
}
