//! Text content rules shared by murmurs and comments

use crate::error::DomainError;

/// Trim user-entered text and enforce the non-empty / max-length rules
///
/// Length is counted in characters, not bytes.
pub fn normalize_content(raw: &str, max_len: usize) -> Result<String, DomainError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(DomainError::ContentEmpty);
    }
    if content.chars().count() > max_len {
        return Err(DomainError::ContentTooLong { max: max_len });
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_content() {
        assert_eq!(normalize_content("  hello \n", 10).unwrap(), "hello");
    }

    #[test]
    fn test_rejects_blank_content() {
        assert!(matches!(normalize_content("", 10), Err(DomainError::ContentEmpty)));
        assert!(matches!(normalize_content(" \t ", 10), Err(DomainError::ContentEmpty)));
    }

    #[test]
    fn test_length_counts_characters() {
        // 5 CJK characters are 15 bytes
        assert!(normalize_content("今天又加班", 5).is_ok());
        assert!(matches!(
            normalize_content("今天又加班了", 5),
            Err(DomainError::ContentTooLong { max: 5 })
        ));
    }
}
