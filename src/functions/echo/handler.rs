//! Echo function handler.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{debug, warn};

use super::parser::{self, Body};

/// Prefix of every echo response.
pub const ECHO_PREFIX: &str = "Echo: ";

/// Echo the request body back with a fixed prefix.
///
/// `application/json` bodies are rendered as compact JSON. `text/plain`
/// bodies and every other (or missing) content type use the body's text form.
/// The content type is compared exactly; a JSON body sent with parameters
/// such as `; charset=utf-8` takes the default branch.
pub fn echo_request(content_type: Option<&str>, body: &Body) -> String {
    let content = match content_type {
        Some("application/json") => body.to_json_string(),
        Some("text/plain") => body.to_text(),
        // Same as text/plain, including for structured bodies.
        _ => body.to_text(),
    };

    format!("{ECHO_PREFIX}{content}")
}

/// HTTP entry point for [`echo_request`].
///
/// Decodes the body the way the functions host does and returns the echo as
/// a `text/plain` 200. A malformed JSON body is rejected with a 400 before
/// the function runs.
pub async fn handle_request(headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let body = match parser::parse_body(content_type, &body) {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Failed to parse request body");
            return (
                StatusCode::BAD_REQUEST,
                format!("Failed to parse request body: {e}"),
            )
                .into_response();
        }
    };

    debug!(content_type, "Echoing request");
    echo_request(content_type, &body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    fn echo(content_type: Option<&str>, input: &[u8]) -> String {
        let body = parser::parse_body(content_type, input).unwrap();
        echo_request(content_type, &body)
    }

    #[test]
    fn test_echo_json() {
        assert_eq!(
            echo(Some("application/json"), br#"{"msg":"hi"}"#),
            r#"Echo: {"msg":"hi"}"#
        );
        assert_eq!(echo(Some("application/json"), b"{}"), "Echo: {}");
    }

    #[test]
    fn test_echo_json_is_compact() {
        assert_eq!(
            echo(Some("application/json"), b"{ \"msg\" :\n [1, 2] }"),
            r#"Echo: {"msg":[1,2]}"#
        );
        assert_eq!(echo(Some("application/json"), b"\"hi\""), r#"Echo: "hi""#);
    }

    #[test]
    fn test_echo_text() {
        assert_eq!(echo(Some("text/plain"), b"hello"), "Echo: hello");
        assert_eq!(echo(Some("text/plain"), b""), "Echo: ");
    }

    #[test]
    fn test_echo_without_content_type() {
        assert_eq!(echo(None, b"hello"), "Echo: hello");
        assert_eq!(echo(None, b""), "Echo: ");
    }

    #[test]
    fn test_echo_other_content_type() {
        assert_eq!(echo(Some("application/xml"), b"<a/>"), "Echo: <a/>");
        // Not an exact match, so not the plain text branch, same output.
        assert_eq!(echo(Some("text/plain; charset=utf-8"), b"hi"), "Echo: hi");
    }

    #[test]
    fn test_default_branch_matches_text_branch() {
        let bodies = [
            Body::Text("hello".to_string()),
            Body::Text(String::new()),
            Body::Json(json!("hello")),
            Body::Json(json!({"msg": "hi"})),
            Body::Json(json!([1, 2, 3])),
        ];

        for body in &bodies {
            let text = echo_request(Some("text/plain"), body);
            assert_eq!(echo_request(None, body), text);
            assert_eq!(echo_request(Some("application/xml"), body), text);
        }
    }

    #[test]
    fn test_structured_body_in_default_branch() {
        // Parsed as JSON by the host, but the header is not an exact match.
        let content_type = Some("application/json; charset=utf-8");
        assert_eq!(echo(content_type, br#"{"msg":"hi"}"#), r#"Echo: {"msg":"hi"}"#);
        assert_eq!(echo(content_type, br#""hi""#), "Echo: hi");
    }

    #[test]
    fn test_json_branch_with_text_body() {
        let body = Body::Text("hello".to_string());
        assert_eq!(echo_request(Some("application/json"), &body), r#"Echo: "hello""#);
    }

    #[test]
    fn test_idempotent() {
        let body = Body::Json(json!({"msg": "hi"}));
        let first = echo_request(Some("application/json"), &body);
        let second = echo_request(Some("application/json"), &body);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_handle_request() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "text/plain".parse().unwrap());

        let response = handle_request(headers, Bytes::from_static(b"hello")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Echo: hello");
    }

    #[tokio::test]
    async fn test_handle_invalid_json() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let response = handle_request(headers, Bytes::from_static(b"{oops")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"Failed to parse request body: invalid JSON"));
    }
}
