//! JSON body parsing middleware
//!
//! Any request carrying a body must carry a JSON object. The parsed object is
//! stashed in request extensions for handlers to pick up through the
//! [`JsonBody`] extractor; anything else is answered with 400 before routing
//! reaches a handler. Bodiless requests pass through untouched.

use axum::body::{to_bytes, Body};
use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Message returned for every unparseable body.
pub const MALFORMED_BODY_MESSAGE: &str = "Request body is not valid 'application/json'";

/// Largest body the middleware will buffer.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Parsed JSON object body
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Map<String, Value>);

/// Middleware: buffer the body, require a JSON object, stash it.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        tracing::debug!(error = %e, "failed to buffer request body");
        ApiError::MalformedBody
    })?;

    if !bytes.is_empty() {
        let data = parse_object(&bytes)?;
        parts.extensions.insert(JsonBody(data));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn parse_object(bytes: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "request body is not a JSON object");
            Err(ApiError::MalformedBody)
        }
        Err(e) => {
            tracing::debug!(error = %e, "request body is not valid JSON");
            Err(ApiError::MalformedBody)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Handlers that need a body take it from here; no parsed body means the
/// request had none, which is just as malformed.
impl<S> FromRequestParts<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<JsonBody>()
            .ok_or(ApiError::MalformedBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_object() {
        let map = parse_object(br#"{"valid": "json"}"#).unwrap();
        assert_eq!(map.get("valid"), Some(&Value::String("json".into())));
    }

    #[test]
    fn rejects_json_string() {
        assert!(matches!(
            parse_object(br#""Invalid JSON""#),
            Err(ApiError::MalformedBody)
        ));
    }

    #[test]
    fn rejects_json_null() {
        assert!(matches!(parse_object(b"null"), Err(ApiError::MalformedBody)));
    }

    #[test]
    fn rejects_array_and_garbage() {
        assert!(parse_object(b"[1, 2]").is_err());
        assert!(parse_object(b"{not json").is_err());
    }
}
