//! Handler trait and type erasure.
//!
//! # How async handlers are stored
//!
//! The router holds handlers of *different* types in a single
//! `HashMap<Method, Tree>`, so each one is hidden behind a trait object
//! (`dyn ErasedHandler<S>`) and stored uniformly.
//!
//! ```text
//! async fn list(req: Request, store: Store) -> … { … }   ← user writes this
//!        ↓ router.on(Method::Get, "/todos", list)
//! list.into_boxed_handler()                              ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(list))                              ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler<S> = Arc<dyn ErasedHandler<S>>
//! handler.call(req, state.clone())  at request time      ← one vtable dispatch
//!        ↓
//! Box::pin(async { list(req, store).await.into_response() })
//! ```
//!
//! Per request that costs one Arc clone, one clone of the shared state and
//! one virtual call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// Handler futures are `'static`; middleware futures borrow the router for
/// `'a`. Both fit this alias.
pub type BoxFuture<'a> = Pin<Box<dyn Future<Output = Response> + Send + 'a>>;

/// Internal dispatch interface.
///
/// Public only because it shows up in [`Handler::into_boxed_handler`].
#[doc(hidden)]
pub trait ErasedHandler<S> {
    fn call(&self, req: Request, state: S) -> BoxFuture<'static>;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler<S> = Arc<dyn ErasedHandler<S> + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Satisfied by any `async fn` (or closure returning a future) shaped like:
///
/// ```text
/// async fn name(req: Request, state: S) -> impl IntoResponse
/// ```
///
/// where `S` is the router's shared state. Sealed: the blanket impl below is
/// the only implementation.
pub trait Handler<S>: private::Sealed<S> + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler<S>;
}

mod private {
    pub trait Sealed<S> {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R, S> private::Sealed<S> for F
where
    F: Fn(Request, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R, S> Handler<S> for F
where
    F: Fn(Request, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler<S> {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Bridges a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R, S> ErasedHandler<S> for FnHandler<F>
where
    F: Fn(Request, S) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request, state: S) -> BoxFuture<'static> {
        let fut = (self.0)(req, state);
        Box::pin(async move { fut.await.into_response() })
    }
}
