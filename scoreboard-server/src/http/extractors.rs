//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

use super::error::ApiError;
use crate::models::ValidationError;

/// Raw body of a request that declared a JSON content type.
///
/// Unlike `axum::Json`, rejections are reported as `malformed_request`
/// validation errors, and the body is left unparsed so the handler can tell
/// a missing field from a wrongly typed one.
pub struct JsonBody(pub Bytes);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::Validation(ValidationError::MalformedRequest {
                reason: "expected a JSON request body",
            }));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|_| {
            ApiError::Validation(ValidationError::MalformedRequest {
                reason: "could not read request body",
            })
        })?;

        Ok(Self(bytes))
    }
}

/// `application/json` or any `+json` suffix, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(has_json_content_type(&headers("Application/JSON")));
        assert!(has_json_content_type(&headers("application/vnd.api+json")));
    }

    #[test]
    fn non_json_content_types() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
    }
}
