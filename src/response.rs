//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. The finalizing
//! middleware may still rewrite headers before it reaches the wire.

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

/// Media type of every HAL document the API emits.
pub const HAL_JSON: &str = "application/hal+json; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use todo_hal::{Response, Status};
///
/// Response::hal(&serde_json::json!({ "version": "0.1.0" }));
/// Response::text("hello");
/// Response::status(Status::NoContent);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use todo_hal::{Response, Status};
///
/// Response::builder()
///     .status(Status::BadRequest)
///     .hal(&serde_json::json!({ "error": "nope" }));
///
/// Response::builder()
///     .header("allow", "GET,HEAD")
///     .text("Allow: GET,HEAD");
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` with a serialized HAL document.
    pub fn hal<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::builder().hal(value)
    }

    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes_raw("text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), headers: Vec::new(), status: code.into() }
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    fn bytes_raw(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            body,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            status: Status::Ok.into(),
        }
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body_bytes(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replaces every existing value of `name` with `value`.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
    }

    /// Drops the body, keeping status and headers. Used to answer `HEAD`:
    /// `content-length` still announces the length the `GET` body had.
    pub fn without_body(mut self) -> Self {
        if !self.body.is_empty() && self.header("content-length").is_none() {
            let len = self.body.len().to_string();
            self.set_header("content-length", &len);
        }
        self.body.clear();
        self
    }

    /// Converts into the hyper-facing response type.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(Bytes::from(self.body))).unwrap_or_else(|e| {
            error!("invalid response parts: {e}");
            let mut fallback = http::Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = Status::InternalServerError.into();
            fallback
        })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a serialized HAL body (`application/hal+json`).
    ///
    /// A value that fails to serialize yields `500` with no body.
    pub fn hal<T: Serialize + ?Sized>(self, value: &T) -> Response {
        match serde_json::to_vec(value) {
            Ok(body) => self.finish(HAL_JSON, body),
            Err(e) => {
                error!("failed to serialize response body: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish("text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// Terminate with no body (e.g. `Status::NoContent`).
    pub fn no_body(self) -> Response {
        Response { body: Vec::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NoContent`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Lets handlers use `?` on anything that renders itself, e.g. `ApiError`.
impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hal_sets_media_type() {
        let res = Response::hal(&serde_json::json!({ "a": 1 }));
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("Content-Type"), Some(HAL_JSON));
        assert_eq!(res.body_bytes(), br#"{"a":1}"#);
    }

    #[test]
    fn set_header_replaces_existing_value() {
        let mut res = Response::text("hi");
        res.set_header("Content-Type", HAL_JSON);
        assert_eq!(res.headers.len(), 1);
        assert_eq!(res.header("content-type"), Some(HAL_JSON));
    }

    #[test]
    fn without_body_keeps_headers() {
        let res = Response::builder().header("allow", "GET").text("xyz").without_body();
        assert!(res.body_bytes().is_empty());
        assert_eq!(res.header("allow"), Some("GET"));
        assert_eq!(res.header("content-length"), Some("3"));
    }

    #[test]
    fn without_body_on_empty_response_adds_no_length() {
        let res = Response::status(Status::NoContent).without_body();
        assert_eq!(res.header("content-length"), None);
    }

    #[test]
    fn result_renders_either_side() {
        let ok: Result<Status, Status> = Ok(Status::NoContent);
        let err: Result<Status, Status> = Err(Status::NotFound);
        assert_eq!(ok.into_response().status_code(), 204);
        assert_eq!(err.into_response().status_code(), 404);
    }

    #[test]
    fn into_http_carries_status_and_headers() {
        let res = Response::builder()
            .status(Status::BadRequest)
            .header("x-test", "1")
            .text("bad")
            .into_http();
        assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(res.headers()["x-test"], "1");
    }
}
