//! Cross-origin resource sharing.

use crate::handler::BoxFuture;
use crate::method::Method;
use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

const ALLOW_METHODS: &str = "GET,HEAD,PUT,POST,DELETE";

/// Permissive CORS policy.
///
/// The `Origin` of the caller is echoed back (or `*` when absent). A
/// preflight, i.e. an `OPTIONS` request carrying
/// `Access-Control-Request-Method`, is answered here with `204` and never
/// reaches the router. A plain `OPTIONS` falls through to its handler.
#[derive(Clone, Debug, Default)]
pub struct Cors {
    max_age: Option<u32>,
}

impl Cors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets browsers cache preflight answers for `seconds`.
    pub fn max_age(mut self, seconds: u32) -> Self {
        self.max_age = Some(seconds);
        self
    }
}

impl Middleware for Cors {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
        let origin = req.header("origin").unwrap_or("*").to_owned();

        if req.method() == Method::Options && req.header("access-control-request-method").is_some() {
            let mut res = Response::builder()
                .status(Status::NoContent)
                .header("access-control-allow-origin", &origin)
                .header("access-control-allow-methods", ALLOW_METHODS)
                .no_body();
            if let Some(headers) = req.header("access-control-request-headers") {
                res.set_header("access-control-allow-headers", headers);
            }
            if let Some(max_age) = self.max_age {
                res.set_header("access-control-max-age", &max_age.to_string());
            }
            return Box::pin(async move { res });
        }

        Box::pin(async move {
            let mut res = next.run(req).await;
            res.set_header("access-control-allow-origin", &origin);
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http_body_util::Full;

    use super::*;
    use crate::Router;

    async fn allow(_req: Request, _state: ()) -> &'static str {
        "Allow: GET"
    }

    fn router() -> Router<()> {
        Router::new(())
            .on(Method::Get, "/", allow)
            .on(Method::Options, "/", allow)
            .layer(Cors::new().max_age(600))
    }

    #[tokio::test]
    async fn echoes_origin_on_simple_requests() {
        let req = http::Request::builder()
            .uri("/")
            .header("origin", "http://app.example")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let res = router().respond(req).await;
        assert_eq!(res.status(), http::StatusCode::OK);
        assert_eq!(res.headers()["access-control-allow-origin"], "http://app.example");
    }

    #[tokio::test]
    async fn wildcard_without_origin() {
        let req = http::Request::builder().uri("/").body(Full::new(Bytes::new())).unwrap();
        let res = router().respond(req).await;
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn answers_preflight() {
        let req = http::Request::builder()
            .method(http::Method::OPTIONS)
            .uri("/")
            .header("origin", "http://app.example")
            .header("access-control-request-method", "PUT")
            .header("access-control-request-headers", "content-type")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let res = router().respond(req).await;
        assert_eq!(res.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(res.headers()["access-control-allow-methods"], ALLOW_METHODS);
        assert_eq!(res.headers()["access-control-allow-headers"], "content-type");
        assert_eq!(res.headers()["access-control-max-age"], "600");
    }

    #[tokio::test]
    async fn plain_options_reaches_handler() {
        let req = http::Request::builder()
            .method(http::Method::OPTIONS)
            .uri("/")
            .body(Full::new(Bytes::new()))
            .unwrap();
        let res = router().respond(req).await;
        assert_eq!(res.status(), http::StatusCode::OK);
    }
}
