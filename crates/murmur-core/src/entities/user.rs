//! User entity - a wallet-identified account

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// User entity
///
/// Identity is the wallet address; `id` is a local surrogate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub address: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: EntityId, address: String) -> Self {
        Self {
            id,
            address,
            nickname: None,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    /// Builder-style nickname setter
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Builder-style avatar setter
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Nickname if set, otherwise the shortened wallet address
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nickname) => nickname.clone(),
            None => short_address(&self.address),
        }
    }

    /// Validate and normalize a wallet address
    ///
    /// Addresses are hex strings with a `0x` prefix; they are compared
    /// case-insensitively, so the normalized form is lowercase.
    pub fn normalize_address(raw: &str) -> Result<String, DomainError> {
        let address = raw.trim().to_lowercase();
        let hex = address
            .strip_prefix("0x")
            .ok_or_else(|| DomainError::InvalidAddress(raw.to_string()))?;
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidAddress(raw.to_string()));
        }
        Ok(address)
    }
}

/// `0x1234...cdef` style abbreviation used for anonymous authors
fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let user = User::new(EntityId::new(1), "0x1234567890abcdef".to_string());
        assert_eq!(user.display_name(), "0x1234...cdef");

        let user = user.with_nickname("吐槽达人");
        assert_eq!(user.display_name(), "吐槽达人");
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            User::normalize_address("  0xABCDEF1234567890 ").unwrap(),
            "0xabcdef1234567890"
        );
        assert!(User::normalize_address("").is_err());
        assert!(User::normalize_address("0x").is_err());
        assert!(User::normalize_address("1234").is_err());
        assert!(User::normalize_address("0xnothex").is_err());
    }
}
