//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. The router also owns the
//! shared state handed to every handler and the middleware stack wrapped
//! around dispatch.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use matchit::Router as MatchitRouter;
use tracing::warn;

use crate::handler::{BoxFuture, BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{Endpoint, Middleware, Next};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] and [`Router::layer`] call returns `self` so
/// registrations chain naturally.
pub struct Router<S> {
    routes: Routes<S>,
    middleware: Vec<Arc<dyn Middleware>>,
}

struct Routes<S> {
    trees: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty router whose handlers all receive a clone of `state`.
    pub fn new(state: S) -> Self {
        Self {
            routes: Routes { trees: HashMap::new(), state },
            middleware: Vec::new(),
        }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting path. Routes are fixed at startup,
    /// so this surfaces as a programming error before the server binds.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .trees
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Wraps every request in `middleware`.
    ///
    /// Layers run in registration order: the first one added sees the request
    /// first and the response last.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Routes one request and produces one response.
    ///
    /// Unknown methods get `405` straight away. Everything else runs through
    /// the middleware chain, ending in the matched handler or a `404`. A
    /// `HEAD` with no route of its own is served by the `GET` handler with
    /// the body stripped.
    pub async fn respond<B>(&self, req: http::Request<B>) -> http::Response<Full<Bytes>>
    where
        B: Body + Send,
        B::Data: Send,
        B::Error: Display,
    {
        let (parts, body) = req.into_parts();

        let Ok(method) = Method::try_from(&parts.method) else {
            warn!(method = %parts.method, "unsupported method");
            return Response::status(Status::MethodNotAllowed).into_http();
        };

        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                warn!("failed to read request body: {e}");
                return Response::status(Status::BadRequest).into_http();
            }
        };

        let req = Request::new(method, parts.uri, parts.headers, body);
        Next::new(&self.middleware, &self.routes).run(req).await.into_http()
    }
}

impl<S> Routes<S> {
    fn lookup(&self, method: Method, path: &str) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.trees.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl<S> Endpoint for Routes<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn call(&self, mut req: Request) -> BoxFuture<'_> {
        if let Some((handler, params)) = self.lookup(req.method(), req.path()) {
            req.params = params;
            return handler.call(req, self.state.clone());
        }

        // HEAD without its own route answers like GET, minus the body.
        if req.method() == Method::Head {
            if let Some((handler, params)) = self.lookup(Method::Get, req.path()) {
                req.params = params;
                let fut = handler.call(req, self.state.clone());
                return Box::pin(async move { fut.await.without_body() });
            }
        }

        Box::pin(async { Response::status(Status::NotFound) })
    }
}
