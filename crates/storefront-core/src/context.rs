//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            next_seed(),
            next_seed()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

static SEED: AtomicU32 = AtomicU32::new(12345);

// LCG step; WASI has no cheap entropy source.
fn next_seed() -> u32 {
    let mut current = SEED.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_mul(1103515245).wrapping_add(12345);
        match SEED.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => current = observed,
        }
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a page handler knows about the incoming request.
#[derive(Debug)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Request path, without the query string.
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    /// Parameters the router extracted from the path (`id` for `/product/:id`).
    pub params: HashMap<String, String>,
}

impl RequestContext {
    /// Create a new request context from a path that may carry a query string.
    pub fn new(path_with_query: impl Into<String>) -> Self {
        let raw = path_with_query.into();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (raw, None),
        };

        Self {
            request_id: RequestId::generate(),
            path,
            query: query.filter(|q| !q.is_empty()),
            params: HashMap::new(),
        }
    }

    /// Set a route parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Path and query as received, e.g. `/product/abc?ref=mail`.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}
