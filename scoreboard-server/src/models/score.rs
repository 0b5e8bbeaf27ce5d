//! Score validation

use super::ValidationError;

/// Non-negative score that fits the `INTEGER` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(i32);

impl Score {
    /// # Example
    /// ```
    /// use scoreboard_server::models::Score;
    ///
    /// assert_eq!(Score::new(42).unwrap().get(), 42);
    /// assert!(Score::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::InvalidScore {
                reason: "score must be zero or greater",
            });
        }

        let value = i32::try_from(value).map_err(|_| ValidationError::InvalidScore {
            reason: "score is too large",
        })?;

        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Score::new(0).is_ok());
        assert!(Score::new(i32::MAX as i64).is_ok());
        assert!(Score::new(i32::MAX as i64 + 1).is_err());
        assert_eq!(Score::new(-1).unwrap_err().code(), "invalid_score");
    }
}
