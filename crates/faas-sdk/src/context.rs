//! Invocation context handed to every handler
//!
//! The runtime builds one [`Context`] per invocation from the transport-level
//! request. Handlers are free to ignore it; the stateless and cold-start handlers do.

use std::collections::HashMap;
use uuid::Uuid;

/// Prefix of CloudEvents attributes carried as HTTP headers (binary mode).
pub const CLOUD_EVENT_HEADER_PREFIX: &str = "ce-";

/// Request identifier for tracing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Create a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from a string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-invocation metadata
#[derive(Debug, Clone)]
pub struct Context {
    /// Unique request identifier
    pub request_id: RequestId,

    /// HTTP method (GET, POST, ...)
    pub method: String,

    /// Request path (e.g., "/")
    pub path: String,

    /// Query parameters
    pub query: HashMap<String, String>,

    /// HTTP headers, names lower-cased
    pub headers: HashMap<String, String>,
}

impl Context {
    /// Create a context for a request with the given method and path
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Add a header (builder pattern)
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Get a header value (case-insensitive lookup).
    ///
    /// # Example
    /// ```ignore
    /// let content_type = ctx.header("Content-Type");
    /// ```
    pub fn header(&self, key: &str) -> Option<&String> {
        let key_lower = key.to_ascii_lowercase();
        self.headers.iter()
            .find(|(k, _)| k.to_ascii_lowercase() == key_lower)
            .map(|(_, v)| v)
    }

    /// Get the Content-Type header value.
    pub fn content_type(&self) -> Option<&String> {
        self.header("content-type")
    }

    /// All CloudEvents attribute headers (`ce-id`, `ce-type`, ...).
    pub fn cloud_event_headers(&self) -> impl Iterator<Item = (&String, &String)> {
        self.headers.iter()
            .filter(|(k, _)| k.to_ascii_lowercase().starts_with(CLOUD_EVENT_HEADER_PREFIX))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new("POST", "/")
    }
}
