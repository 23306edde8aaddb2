//! Request body and query string parsing
//!
//! Only bodies declared as `application/json` are parsed. Any other (or
//! missing) content type, and an empty body, give an empty payload, which
//! every POST endpoint then rejects through its own validation.

use serde_json::{Map, Value};

use crate::api::Payload;

/// Body declared as JSON that cannot be used as a payload
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("invalid JSON body: {0}")]
    Syntax(#[from] serde_json::Error),
    /// Top level is a string, number, boolean or null
    #[error("JSON body must be an object or an array")]
    NotContainer,
}

/// Whether a `Content-Type` header value is `application/json`, parameters ignored
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .eq_ignore_ascii_case("application/json")
}

/// Turn a raw request body into a payload
///
/// A JSON array carries no named fields, so it becomes an empty payload:
/// every endpoint's required-field check then fails for it. A body of only
/// whitespace is not empty and fails to parse.
pub fn parse_payload(content_type: Option<&str>, body: &[u8]) -> Result<Payload, BodyError> {
    if !content_type.is_some_and(is_json_content_type) || body.is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Ok(Map::new()),
        _ => Err(BodyError::NotContainer),
    }
}

/// Resolve the inquiry id from a path segment, then the `id` query parameter
///
/// An empty query value counts as absent. A repeated `id` parameter, or any
/// bracketed `id[...]` key, makes a list; the list is rendered as a JSON
/// array, which never names a catalog entry.
pub fn resolve_id(path_id: Option<String>, query: Option<&str>) -> Option<String> {
    if let Some(id) = path_id.filter(|id| !id.is_empty()) {
        return Some(id);
    }

    let mut bracketed = false;
    let values: Vec<String> = form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .filter(|(key, _)| {
            let is_list_key = key.starts_with("id[");
            bracketed |= is_list_key;
            key == "id" || is_list_key
        })
        .map(|(_, value)| value.into_owned())
        .collect();

    match values.as_slice() {
        [] => None,
        [single] if !bracketed && single.is_empty() => None,
        [single] if !bracketed => Some(single.clone()),
        list => Some(serde_json::to_string(list).unwrap_or_default()),
    }
}

/// Percent-decode a single path segment
///
/// `+` is literal in a path, unlike in a query string.
pub fn decode_segment(segment: &str) -> String {
    let escaped = segment.replace('+', "%2B").replace('&', "%26");
    form_urlencoded::parse(format!("s={escaped}").as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
