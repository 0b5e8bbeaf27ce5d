//! Player name validation

use super::ValidationError;

/// Maximum name length in characters (matches `VARCHAR(50)`)
const MAX_NAME_LEN: usize = 50;

/// Validated, trimmed player name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a player name.
    ///
    /// # Rules
    /// - Leading/trailing whitespace is trimmed
    /// - 1-50 characters after trimming (characters, not bytes)
    /// - No NUL characters (PostgreSQL text cannot store them)
    ///
    /// # Example
    /// ```
    /// use scoreboard_server::models::PlayerName;
    ///
    /// assert_eq!(PlayerName::new("  Alice ").unwrap().as_str(), "Alice");
    /// assert!(PlayerName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidName {
                reason: "name cannot be empty",
            });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::InvalidName {
                reason: "name exceeds 50 characters",
            });
        }

        if trimmed.contains('\0') {
            return Err(ValidationError::InvalidName {
                reason: "name contains a NUL character",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(PlayerName::new("\tCarol \n").unwrap().as_str(), "Carol");
    }

    #[test]
    fn whitespace_only_rejected() {
        let err = PlayerName::new("  ").unwrap_err();
        assert_eq!(err.code(), "invalid_name");
        assert!(PlayerName::new("").is_err());
    }

    #[test]
    fn max_length_counts_characters() {
        assert!(PlayerName::new(&"a".repeat(50)).is_ok());
        assert!(PlayerName::new(&"a".repeat(51)).is_err());

        // 50 multi-byte characters are still 50 characters
        let wide = "玩".repeat(50);
        assert!(wide.len() > 50);
        assert!(PlayerName::new(&wide).is_ok());
    }

    #[test]
    fn nul_character_rejected() {
        let err = PlayerName::new("Al\0ice").unwrap_err();
        assert_eq!(err.code(), "invalid_name");
        assert!(PlayerName::new("\0").is_err());
    }

    #[test]
    fn length_measured_after_trim() {
        let padded = format!("   {}   ", "b".repeat(50));
        assert_eq!(PlayerName::new(&padded).unwrap().as_str().len(), 50);
    }
}
