//! Raw transport responses.
//!
//! A [`RawResponse`] is produced by a [`Transport`](crate::clients::Transport)
//! and consumed by exactly one response pipeline run.

use std::collections::HashMap;

/// A response exactly as the transport received it.
///
/// Header names are stored lowercase; a header may carry several values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The body bytes.
    pub body: Vec<u8>,
    /// The HTTP status code, or `None` when the response was not HTTP.
    pub status_code: Option<u16>,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
}

impl RawResponse {
    /// Creates an HTTP response with the given status code.
    ///
    /// Header names are lowercased on the way in.
    #[must_use]
    pub fn new(status_code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            body,
            status_code: Some(status_code),
            headers: lowercase_keys(headers),
        }
    }

    /// Creates a response that carries no HTTP status code.
    #[must_use]
    pub fn non_http(body: Vec<u8>) -> Self {
        Self {
            body,
            status_code: None,
            headers: HashMap::new(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code
            .is_some_and(|code| (200..300).contains(&code))
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn lowercase_keys(headers: HashMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, values) in headers {
        result.entry(name.to_lowercase()).or_default().extend(values);
    }
    result
}
