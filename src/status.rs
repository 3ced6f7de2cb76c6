//! HTTP status codes the todo API emits.
//!
//! Use [`Status`] anywhere a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use todo_hal::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NoContent);
//!
//! // return Status directly from a handler
//! async fn clear(_req: todo_hal::Request, _state: ()) -> Status {
//!     Status::NoContent
//! }
//! ```

/// A status code used by the API surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    NoContent,           // 204
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
    InternalServerError, // 500
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::NoContent           => 204,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::InternalServerError => 500,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok                  => http::StatusCode::OK,
            Status::NoContent           => http::StatusCode::NO_CONTENT,
            Status::BadRequest          => http::StatusCode::BAD_REQUEST,
            Status::NotFound            => http::StatusCode::NOT_FOUND,
            Status::MethodNotAllowed    => http::StatusCode::METHOD_NOT_ALLOWED,
            Status::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
