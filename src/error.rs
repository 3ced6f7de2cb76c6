//! Error types.
//!
//! Two families live here. [`Error`] surfaces infrastructure failures such as
//! binding a port. [`ApiError`] is what a resource handler returns when a
//! request cannot be served; it renders itself as an HTTP response.

use serde_json::json;

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by the server's fallible operations.
///
/// Application-level failures (400, 404) are expressed as [`ApiError`]
/// values turned into responses, never as `Error`s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// A request the resource handlers refuse to serve.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The payload is well-formed JSON but violates a field contract.
    #[error("{0}")]
    Validation(String),

    /// The body could not be parsed as JSON.
    #[error("invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// No todo carries the addressed id.
    #[error("not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => Status::BadRequest,
            Self::NotFound => Status::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // 404 carries no payload at all.
            Self::NotFound => Response::status(Status::NotFound),
            other => {
                let body = json!({ "error": other.to_string() });
                Response::builder().status(other.status()).hal(&body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_renders_error_object() {
        let res = ApiError::Validation("title missing".into()).into_response();
        assert_eq!(res.status_code(), 400);
        let body: serde_json::Value = serde_json::from_slice(res.body_bytes()).unwrap();
        assert_eq!(body, json!({ "error": "title missing" }));
    }

    #[test]
    fn not_found_has_empty_body() {
        let res = ApiError::NotFound.into_response();
        assert_eq!(res.status_code(), 404);
        assert!(res.body_bytes().is_empty());
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = serde_json::from_slice::<serde_json::Value>(b"{nope").unwrap_err();
        let res = ApiError::from(err).into_response();
        assert_eq!(res.status_code(), 400);
    }
}
