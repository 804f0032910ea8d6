//! Inbound request representation.

use std::collections::HashMap;

/// An inbound request as handed over by the host framework.
///
/// Only `method` matters to dispatch. It is optional because hosts are not
/// required to supply one; an absent method resolves like the empty token.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// The HTTP method token (GET, POST, etc.), if the host supplied one
    pub method: Option<String>,
    /// The request path
    pub path: String,
    /// The HTTP headers
    pub headers: HashMap<String, String>,
    /// The request body
    pub body: Vec<u8>,
    /// Query parameters parsed from the path
    pub query_params: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new request carrying the given method token.
    ///
    /// The token is stored as given; lowercase tokens are not normalized and
    /// will only match a route bound under the same lowercase key.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            path: "/".to_string(),
            ..Self::default()
        }
    }

    /// Create a request whose host did not supply a method.
    pub fn without_method() -> Self {
        Self {
            path: "/".to_string(),
            ..Self::default()
        }
    }

    /// The method token used for dispatch, or `""` when absent.
    pub fn method_token(&self) -> &str {
        self.method.as_deref().unwrap_or("")
    }

    /// Set the path, re-parsing its query parameters.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self.query_params = parse_query(&self.path);
        self
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Get a header value.
    ///
    /// # Arguments
    ///
    /// * `name` - The header name
    ///
    /// # Returns
    ///
    /// The header value, if it exists
    pub fn header(&self, name: &str) -> Option<&str> {
        // Header names are case-insensitive
        self.headers.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                Some(v.as_str())
            } else {
                None
            }
        })
    }

    /// Check if a header exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Get a query parameter value.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    /// The body as UTF-8 text, if it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

fn parse_query(path: &str) -> HashMap<String, String> {
    path.split_once('?')
        .map(|(_, query)| query
            .split('&')
            .filter(|s| !s.is_empty())
            .map(|pair| {
                if let Some((k, v)) = pair.split_once('=') {
                    (k.to_string(), v.to_string())
                } else {
                    (pair.to_string(), String::new())
                }
            })
            .collect())
        .unwrap_or_default()
}
