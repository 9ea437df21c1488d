//! Joins authors, comments and the viewer's reactions onto stored entities
//!
//! Each call issues a fixed number of batched repository reads regardless
//! of how many entities are hydrated.

use std::collections::{HashMap, HashSet};

use murmur_core::{Comment, EntityId, Murmur, ReactionKind, ReactionTarget, User};

use crate::dto::{CommentWithDetails, MurmurWithDetails};

use super::context::ClientContext;
use super::error::ClientResult;

struct Lookups {
    users: HashMap<EntityId, User>,
    reactions: HashMap<ReactionTarget, ReactionKind>,
}

impl Lookups {
    async fn load(
        ctx: &ClientContext,
        author_ids: Vec<EntityId>,
        targets: &[ReactionTarget],
    ) -> ClientResult<Self> {
        let mut seen = HashSet::new();
        let author_ids: Vec<EntityId> = author_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let users = ctx
            .user_repo()
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        let reactions = if targets.is_empty() {
            HashMap::new()
        } else {
            ctx.reaction_repo()
                .find_many(ctx.viewer_id(), targets)
                .await?
        };
        Ok(Self { users, reactions })
    }

    fn comment(&self, comment: Comment) -> CommentWithDetails {
        CommentWithDetails {
            author: self.users.get(&comment.author_id).cloned(),
            user_reaction: self
                .reactions
                .get(&ReactionTarget::comment(comment.id))
                .copied(),
            comment,
        }
    }
}

/// Hydrate comments, keeping their order
pub(crate) async fn comments(
    ctx: &ClientContext,
    comments: Vec<Comment>,
) -> ClientResult<Vec<CommentWithDetails>> {
    let authors = comments.iter().map(|c| c.author_id).collect();
    let targets: Vec<ReactionTarget> = comments
        .iter()
        .map(|c| ReactionTarget::comment(c.id))
        .collect();
    let lookups = Lookups::load(ctx, authors, &targets).await?;
    Ok(comments.into_iter().map(|c| lookups.comment(c)).collect())
}

/// Hydrate murmurs with their comments (newest first), keeping their order
pub(crate) async fn murmurs(
    ctx: &ClientContext,
    murmurs: Vec<Murmur>,
) -> ClientResult<Vec<MurmurWithDetails>> {
    let comment_ids: Vec<EntityId> = murmurs
        .iter()
        .flat_map(|m| m.comment_ids.iter().copied())
        .collect();
    let loaded = if comment_ids.is_empty() {
        Vec::new()
    } else {
        ctx.comment_repo().find_by_ids(&comment_ids).await?
    };

    let authors = murmurs
        .iter()
        .map(|m| m.author_id)
        .chain(loaded.iter().map(|c| c.author_id))
        .collect();
    let targets: Vec<ReactionTarget> = murmurs
        .iter()
        .map(|m| ReactionTarget::murmur(m.id))
        .chain(loaded.iter().map(|c| ReactionTarget::comment(c.id)))
        .collect();
    let lookups = Lookups::load(ctx, authors, &targets).await?;

    let mut by_id: HashMap<EntityId, Comment> =
        loaded.into_iter().map(|c| (c.id, c)).collect();

    Ok(murmurs
        .into_iter()
        .map(|murmur| {
            let comments = murmur
                .comment_ids
                .iter()
                .filter_map(|id| by_id.remove(id))
                .map(|c| lookups.comment(c))
                .collect();
            MurmurWithDetails {
                author: lookups.users.get(&murmur.author_id).cloned(),
                user_reaction: lookups
                    .reactions
                    .get(&ReactionTarget::murmur(murmur.id))
                    .copied(),
                comments,
                murmur,
            }
        })
        .collect())
}

/// Hydrate a single murmur
pub(crate) async fn murmur(ctx: &ClientContext, murmur: Murmur) -> ClientResult<MurmurWithDetails> {
    let mut hydrated = murmurs(ctx, vec![murmur]).await?;
    hydrated
        .pop()
        .ok_or_else(|| super::error::ClientError::internal("hydration dropped the murmur"))
}
