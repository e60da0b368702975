//! Echo request body parser.
//!
//! Decodes the raw body bytes into the value the handler sees. JSON media
//! types are deserialized, everything else is treated as text.

use serde_json::Value;

/// Media type the host deserializes before invoking the function.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Decoded request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Body already deserialized from JSON.
    Json(Value),
    /// Raw text body.
    Text(String),
}

impl Body {
    /// Canonical compact JSON text of the body.
    ///
    /// A text body becomes a quoted JSON string literal.
    pub fn to_json_string(&self) -> String {
        match self {
            Body::Json(value) => value.to_string(),
            Body::Text(text) => Value::from(text.as_str()).to_string(),
        }
    }

    /// Default text form of the body.
    ///
    /// Text and JSON strings are used as-is; other JSON values fall back to
    /// their `Display` rendering.
    pub fn to_text(&self) -> String {
        match self {
            Body::Text(text) => text.clone(),
            Body::Json(Value::String(text)) => text.clone(),
            Body::Json(value) => value.to_string(),
        }
    }
}

/// Body decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parse a request body according to its `Content-Type` header.
pub fn parse_body(content_type: Option<&str>, input: &[u8]) -> Result<Body, BodyError> {
    let is_json = content_type
        .map(media_type)
        .is_some_and(|media| media.eq_ignore_ascii_case(JSON_MEDIA_TYPE));

    if !is_json {
        return Ok(Body::Text(String::from_utf8_lossy(input).into_owned()));
    }

    // An empty JSON body decodes to an empty object
    if input
        .iter()
        .all(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
    {
        return Ok(Body::Json(Value::Object(Default::default())));
    }

    Ok(Body::Json(serde_json::from_slice(input)?))
}

/// Media type of a `Content-Type` value, without parameters.
pub fn media_type(content_type: &str) -> &str {
    content_type
        .split_once(';')
        .map_or(content_type, |(media, _)| media)
        .trim()
}
