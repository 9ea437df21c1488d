//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CircleRepository, CommentRepository, MembershipChange, MurmurRepository, ReactionRepository,
    RepoResult, UserRepository,
};
