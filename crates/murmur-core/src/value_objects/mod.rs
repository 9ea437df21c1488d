//! Value objects - immutable types that represent domain concepts

mod entity_id;
mod reaction;

pub use entity_id::{EntityId, EntityIdParseError, IdGenerator, InvalidWorkerId};
pub use reaction::{ReactionCounts, ReactionDelta, ReactionKind, ReactionTarget, TargetType};
