//! The API root: the entry point a client discovers everything else from.

use serde::Serialize;

use crate::hal::{self, rel, Link, Links};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::store::Store;

/// Version advertised by the index document.
pub const VERSION: &str = "0.1.0";

/// Methods listed by `OPTIONS /`.
pub const ALLOWED_METHODS: &str = "HEAD,GET,PUT,DELETE,OPTIONS";

#[derive(Serialize)]
struct IndexResource {
    #[serde(rename = "_links")]
    links: Links,
    version: &'static str,
}

/// `GET /` (and `HEAD /` through the router's GET fallback)
pub async fn get(req: Request, _store: Store) -> Response {
    let origin = req.origin();
    let links = hal::links(
        &origin,
        req.original_url(),
        [
            (
                rel::CREATE,
                Link::new(format!("{origin}/todos")).title("Creates a new todo.").method(Method::Post),
            ),
            (rel::LIST, Link::new(format!("{origin}/todos")).title("Lists all todos.")),
        ],
    );

    Response::hal(&IndexResource { links, version: VERSION })
}

/// `OPTIONS /`
pub async fn options(_req: Request, _store: Store) -> Response {
    Response::builder()
        .header("allow", ALLOWED_METHODS)
        .text(format!("Allow: {ALLOWED_METHODS}"))
}

/// `TRACE /`: not an echo.
pub async fn trace(_req: Request, _store: Store) -> Response {
    Response::text("Smart! But you can't trace.")
}
