//! # todo-hal
//!
//! An in-memory todo list served as a HAL+JSON hypermedia API.
//!
//! ## Surface
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | `GET` | `/` | 200, index document | |
//! | `HEAD` | `/` | 200, empty body | |
//! | `OPTIONS` | `/` | 200, allowed methods | |
//! | `TRACE` | `/` | 200, fixed text | |
//! | `GET` | `/todos` | 200, list (`?search=`, `?checked=`) | |
//! | `POST` | `/todos` | 200, item | 400 on a missing or non-string `title` |
//! | `DELETE` | `/todos` | 204 | |
//! | `GET` | `/todos/{id}` | 200, item | 404 |
//! | `PUT` | `/todos/{id}` | 200, item | 404 |
//! | `DELETE` | `/todos/{id}` | 204 | 404 |
//!
//! Every `GET` route also answers `HEAD`. Every response is
//! `application/hal+json; charset=utf-8`. Nothing survives
//! a restart.
//!
//! ## Layers
//!
//! The HTTP plumbing (radix-tree [`Router`], [`middleware`], graceful
//! [`Server`]) is generic over a shared state value. The todo API plugs the
//! [`Store`] in as that state:
//!
//! ```rust,no_run
//! use todo_hal::{Config, Server, Store};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let app = todo_hal::app(&config, Store::new());
//!     Server::bind(config.addr()).serve(app).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod hal;
pub mod middleware;
pub mod resources;
pub mod store;
pub mod todo;

pub use config::Config;
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{HAL_JSON, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, run};
pub use status::Status;
pub use store::Store;

use middleware::{Cors, HalContentType, Trace};
use resources::{index, item, todos};

/// Wires every resource onto a router sharing `store`.
///
/// Layers, outermost first: request tracing, CORS (when enabled), and the
/// HAL content-type finalizer.
pub fn app(config: &Config, store: Store) -> Router<Store> {
    let mut router = Router::new(store)
        .on(Method::Get,     "/",           index::get)
        .on(Method::Options, "/",           index::options)
        .on(Method::Trace,   "/",           index::trace)
        .on(Method::Get,     "/todos",      todos::list)
        .on(Method::Post,    "/todos",      todos::create)
        .on(Method::Delete,  "/todos",      todos::clear)
        .on(Method::Get,     "/todos/{id}", item::find)
        .on(Method::Put,     "/todos/{id}", item::update)
        .on(Method::Delete,  "/todos/{id}", item::remove)
        .layer(Trace);

    if config.cors {
        router = router.layer(Cors::new());
    }

    router.layer(HalContentType)
}
