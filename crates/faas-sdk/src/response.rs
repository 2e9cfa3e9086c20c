//! Structured response returned by function handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content type used by every plain-text response.
pub const TEXT_PLAIN: &str = "text/plain";

/// The value a handler hands back to the runtime.
///
/// The runtime writes `body` verbatim, copies every entry of `headers` onto
/// the transport response and uses `status_code` when present (200 otherwise).
/// Header names are lower-cased on insert so each name appears once.
///
/// # Example
/// ```ignore
/// StructuredResponse::text("hello")
///     .with_header("Cache-Control", "no-store")
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// HTTP status code, 200 when absent
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: String,
}

impl StructuredResponse {
    /// An empty response: no headers, empty body, default status.
    pub fn new() -> Self {
        Self::default()
    }

    /// A `text/plain` response with the given body.
    ///
    /// # Example
    /// ```ignore
    /// StructuredResponse::text("")      // the empty function
    /// StructuredResponse::text("true")  // the cold-start report
    /// ```
    pub fn text(body: impl Into<String>) -> Self {
        Self::new()
            .with_header("content-type", TEXT_PLAIN)
            .with_body(body)
    }

    /// Add a header (builder pattern). An existing header of the same name,
    /// compared case-insensitively, is replaced.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Set the status code (builder pattern).
    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers.get(&key.to_ascii_lowercase())
    }

    /// The status the runtime will send.
    pub fn status(&self) -> u16 {
        self.status_code.unwrap_or(200)
    }
}
