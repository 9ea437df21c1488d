//! Domain entities - core business objects

mod circle;
mod comment;
mod content;
mod murmur;
mod user;

pub use circle::{Circle, MAX_CIRCLE_DESCRIPTION_LENGTH, MAX_CIRCLE_NAME_LENGTH};
pub use comment::{Comment, DEFAULT_MAX_COMMENT_LENGTH};
pub use content::normalize_content;
pub use murmur::{Murmur, DEFAULT_MAX_MURMUR_LENGTH};
pub use user::User;
