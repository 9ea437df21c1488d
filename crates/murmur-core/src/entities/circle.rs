//! Circle entity - a topic community murmurs are posted into

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Maximum circle name length (characters)
pub const MAX_CIRCLE_NAME_LENGTH: usize = 50;

/// Maximum circle description length (characters)
pub const MAX_CIRCLE_DESCRIPTION_LENGTH: usize = 200;

/// Circle entity
///
/// `member_count` is the aggregate over all memberships; whether the current
/// viewer is a member is per-viewer state kept by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Option<EntityId>,
    pub member_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Circle {
    /// Create a new, empty Circle
    pub fn new(id: EntityId, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
            creator_id: None,
            member_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match over name and description
    ///
    /// A blank query matches nothing.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// Record a new member
    pub fn add_member(&mut self) {
        self.member_count = self.member_count.saturating_add(1);
    }

    /// Record a departing member; never drops below zero
    pub fn remove_member(&mut self) {
        self.member_count = self.member_count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> Circle {
        Circle::new(
            EntityId::new(1),
            "Rust Programmers".to_string(),
            Some("Borrow checker stories".to_string()),
        )
    }

    #[test]
    fn test_matches_name_and_description() {
        let c = circle();
        assert!(c.matches("rust"));
        assert!(c.matches("PROGRAM"));
        assert!(c.matches("checker"));
        assert!(!c.matches("python"));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let c = circle();
        assert!(!c.matches(""));
        assert!(!c.matches("   "));
        assert!(!c.matches("\t\n"));
    }

    #[test]
    fn test_matches_without_description() {
        let c = Circle::new(EntityId::new(2), "程序员吐槽大会".to_string(), None);
        assert!(c.matches("程序员"));
        assert!(!c.matches("学生"));
    }

    #[test]
    fn test_member_count_never_negative() {
        let mut c = circle();
        c.remove_member();
        assert_eq!(c.member_count, 0);
        c.add_member();
        c.add_member();
        c.remove_member();
        assert_eq!(c.member_count, 1);
    }
}
