//! Request adapter for mapping HTTP requests to gate inputs.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use axum::http::Request;

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

static NEXT_REQUEST: AtomicU64 = AtomicU64::new(1);

fn generate_request_id() -> String {
    format!("req-{:08x}", NEXT_REQUEST.fetch_add(1, Ordering::Relaxed))
}

/// Framework-agnostic view of an inbound request.
///
/// Holds only what the gate and the identity provider read: a request id
/// for log correlation, the path (query string removed) and the headers.
/// Header names are stored lowercased.
///
/// # Examples
///
/// ```
/// use showcase_gate::web::RequestAdapter;
///
/// let mut adapter = RequestAdapter::new("req-12345", "/dashboard");
/// adapter.add_header("X-User-Id", "user_1");
///
/// assert_eq!(adapter.path(), "/dashboard");
/// assert_eq!(adapter.header("x-user-id"), Some("user_1"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    request_id: String,
    path: String,
    headers: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates an adapter with no headers.
    pub fn new(request_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            path: path.into(),
            headers: HashMap::new(),
        }
    }

    /// Builds an adapter from an HTTP request.
    ///
    /// Uses the `x-request-id` header when present, otherwise generates an
    /// id. Header values that are not valid UTF-8 are skipped.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generate_request_id);

        let mut adapter = Self::new(request_id, request.uri().path());
        for (name, value) in request.headers() {
            if let Ok(value) = value.to_str() {
                adapter.add_header(name.as_str(), value);
            }
        }
        adapter
    }

    /// Adds a header. Later values for the same name replace earlier ones.
    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Returns the value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the request id.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the request path.
    pub fn path(&self) -> &str {
        &self.path
    }
}
