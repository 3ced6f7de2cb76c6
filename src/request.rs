//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Uri};
use serde_json::Value;

use crate::error::ApiError;
use crate::method::Method;

/// An incoming HTTP request with its body fully collected.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Self {
        Self { method, uri, headers, body, params: HashMap::new() }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Raw query string, without the leading `?`. Empty when absent.
    pub fn query(&self) -> &str {
        self.uri.query().unwrap_or("")
    }

    /// Case-insensitive header lookup. Non-UTF-8 values are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/todos/{id}`, `req.param("id")` on `/todos/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// `scheme://host` as seen by the client.
    ///
    /// The scheme comes from `X-Forwarded-Proto` when a proxy set it. The host
    /// comes from the `Host` header, then the URI authority (HTTP/2), then
    /// falls back to `localhost`.
    pub fn origin(&self) -> String {
        let scheme = self
            .header("x-forwarded-proto")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| self.uri.scheme_str())
            .unwrap_or("http");

        let host = self
            .header("host")
            .or_else(|| self.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        format!("{scheme}://{host}")
    }

    /// Path plus query string, exactly as requested.
    pub fn original_url(&self) -> &str {
        self.uri
            .path_and_query()
            .map_or_else(|| self.uri.path(), |pq| pq.as_str())
    }

    /// Parses the body as JSON.
    ///
    /// An empty body reads as an empty object, so a POST without payload is
    /// handled as one with every field missing.
    pub fn json(&self) -> Result<Value, ApiError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, headers: &[(&'static str, &'static str)], body: &'static [u8]) -> Request {
        let mut map = HeaderMap::new();
        for (k, v) in headers {
            map.insert(*k, http::HeaderValue::from_static(*v));
        }
        Request::new(Method::Get, uri.parse().unwrap(), map, Bytes::from_static(body))
    }

    #[test]
    fn origin_uses_host_header() {
        let req = request("/todos", &[("host", "localhost:3000")], b"");
        assert_eq!(req.origin(), "http://localhost:3000");
    }

    #[test]
    fn origin_honours_forwarded_proto() {
        let req = request(
            "/todos",
            &[("host", "api.example.com"), ("x-forwarded-proto", "https, http")],
            b"",
        );
        assert_eq!(req.origin(), "https://api.example.com");
    }

    #[test]
    fn origin_falls_back_to_uri_authority() {
        let req = request("http://10.0.0.1:8080/todos", &[], b"");
        assert_eq!(req.origin(), "http://10.0.0.1:8080");
    }

    #[test]
    fn original_url_keeps_query() {
        let req = request("/todos?checked=true", &[], b"");
        assert_eq!(req.original_url(), "/todos?checked=true");
        assert_eq!(req.query(), "checked=true");
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let req = request("/todos", &[], b"  ");
        assert_eq!(req.json().unwrap(), serde_json::json!({}));
    }

    #[test]
    fn malformed_body_is_an_error() {
        let req = request("/todos", &[], b"{\"title\":");
        assert!(matches!(req.json(), Err(ApiError::MalformedBody(_))));
    }
}
