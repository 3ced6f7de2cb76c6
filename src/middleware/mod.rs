//! Middleware layer.
//!
//! A layer sees every routed request before its handler and every response
//! after it. It receives the request plus a [`Next`] handle for the rest of
//! the chain, and may answer on its own or await `next.run(req)` and adjust
//! what comes back.
//!
//! Built-in middleware:
//! - [`Trace`]: per-request event with method, path, status, latency
//! - [`Cors`]: permissive cross-origin policy and preflight answers
//! - [`HalContentType`]: stamps every response as `application/hal+json`

mod cors;
mod hal;
mod trace;

pub use cors::Cors;
pub use hal::HalContentType;
pub use trace::Trace;

use std::sync::Arc;

pub use crate::handler::BoxFuture;

use crate::request::Request;

/// A layer wrapped around request dispatch.
///
/// ```rust
/// use todo_hal::middleware::{BoxFuture, Middleware, Next};
/// use todo_hal::Request;
///
/// struct PoweredBy;
///
/// impl Middleware for PoweredBy {
///     fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
///         Box::pin(async move {
///             let mut res = next.run(req).await;
///             res.set_header("x-powered-by", "todo-hal");
///             res
///         })
///     }
/// }
/// ```
pub trait Middleware: Send + Sync + 'static {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a>;
}

/// The innermost step of the chain: route lookup and handler call.
pub(crate) trait Endpoint: Send + Sync {
    fn call(&self, req: Request) -> BoxFuture<'_>;
}

/// The remainder of the middleware chain.
pub struct Next<'a> {
    stack: &'a [Arc<dyn Middleware>],
    endpoint: &'a dyn Endpoint,
}

impl<'a> Next<'a> {
    pub(crate) fn new(stack: &'a [Arc<dyn Middleware>], endpoint: &'a dyn Endpoint) -> Self {
        Self { stack, endpoint }
    }

    /// Runs the remaining layers, then the routed handler.
    pub fn run(self, req: Request) -> BoxFuture<'a> {
        match self.stack.split_first() {
            Some((layer, rest)) => layer.handle(req, Next { stack: rest, endpoint: self.endpoint }),
            None => self.endpoint.call(req),
        }
    }
}
