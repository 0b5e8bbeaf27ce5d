//! Score submission parsing
//!
//! The body is read as raw JSON rather than deserialized into a struct so
//! that each failure maps to its own error kind, checked in a fixed order:
//! malformed body, missing field, invalid name, invalid score.

use serde_json::{Map, Value};

use super::{PlayerName, Score, ValidationError};

/// A submission that passed validation and can be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub name: PlayerName,
    pub score: Score,
}

impl ScoreSubmission {
    /// Parse and validate a JSON request body.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::MalformedRequest {
                reason: "body is not valid JSON",
            })?;

        let Value::Object(fields) = value else {
            return Err(ValidationError::MalformedRequest {
                reason: "body must be a JSON object",
            });
        };

        Self::from_fields(&fields)
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let name = fields
            .get("name")
            .ok_or(ValidationError::MissingField { field: "name" })?;
        let score = fields
            .get("score")
            .ok_or(ValidationError::MissingField { field: "score" })?;

        let name = match name {
            Value::String(s) => PlayerName::new(s)?,
            _ => {
                return Err(ValidationError::InvalidName {
                    reason: "name must be a string",
                })
            }
        };

        let score = match score {
            Value::Number(n) if n.is_i64() || n.is_u64() => match n.as_i64() {
                Some(v) => Score::new(v)?,
                None => {
                    return Err(ValidationError::InvalidScore {
                        reason: "score is too large",
                    })
                }
            },
            _ => {
                return Err(ValidationError::InvalidScore {
                    reason: "score must be an integer",
                })
            }
        };

        Ok(Self { name, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<ScoreSubmission, ValidationError> {
        ScoreSubmission::from_json(body.as_bytes())
    }

    fn code(body: &str) -> &'static str {
        parse(body).unwrap_err().code()
    }

    #[test]
    fn valid_submission() {
        let sub = parse(r#"{"name": "Carol", "score": 42}"#).unwrap();
        assert_eq!(sub.name.as_str(), "Carol");
        assert_eq!(sub.score.get(), 42);
    }

    #[test]
    fn extra_fields_ignored() {
        assert!(parse(r#"{"name": "Dan", "score": 1, "level": 3}"#).is_ok());
    }

    #[test]
    fn malformed_bodies() {
        assert_eq!(code("not json"), "malformed_request");
        assert_eq!(code(""), "malformed_request");
        assert_eq!(code(r#"["Alice", 3]"#), "malformed_request");
        assert_eq!(code(r#""Alice""#), "malformed_request");
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            parse(r#"{"name": "Bob"}"#).unwrap_err(),
            ValidationError::MissingField { field: "score" }
        );
        assert_eq!(
            parse(r#"{"score": 5}"#).unwrap_err(),
            ValidationError::MissingField { field: "name" }
        );
    }

    #[test]
    fn invalid_names() {
        assert_eq!(code(r#"{"name": "  ", "score": 5}"#), "invalid_name");
        assert_eq!(code(r#"{"name": 7, "score": 5}"#), "invalid_name");
        assert_eq!(code(r#"{"name": null, "score": 5}"#), "invalid_name");
        assert_eq!(code(r#"{"name": "Al\u0000ice", "score": 5}"#), "invalid_name");
    }

    #[test]
    fn invalid_scores() {
        assert_eq!(code(r#"{"name": "Alice", "score": -1}"#), "invalid_score");
        assert_eq!(code(r#"{"name": "Alice", "score": 1.5}"#), "invalid_score");
        assert_eq!(code(r#"{"name": "Alice", "score": "10"}"#), "invalid_score");
        assert_eq!(code(r#"{"name": "Alice", "score": true}"#), "invalid_score");
        assert_eq!(
            code(r#"{"name": "Alice", "score": 18446744073709551615}"#),
            "invalid_score"
        );
        assert_eq!(code(r#"{"name": "Alice", "score": 2147483648}"#), "invalid_score");
    }

    #[test]
    fn first_failure_wins() {
        // both name and score invalid: name is checked first
        assert_eq!(code(r#"{"name": "", "score": -1}"#), "invalid_name");
        // missing score beats invalid name
        assert_eq!(code(r#"{"name": ""}"#), "missing_field");
    }
}
