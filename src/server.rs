//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server:
//! 1. Immediately stops `listener.accept()`, so no new connections are made.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns from [`Server::serve`], which lets `main` exit cleanly.
//!
//! The todo store lives in memory, so whatever it holds is gone after that.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// ```rust,no_run
    /// use todo_hal::Server;
    /// let server = Server::bind(([0, 0, 0, 0], 3000).into());
    /// ```
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve<S>(self, router: Router<S>) -> Result<(), Error>
    where
        S: Clone + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(self.addr).await?;
        run(listener, router, shutdown_signal()).await
    }
}

/// Serves `router` on an already bound `listener` until `shutdown` resolves,
/// then drains in-flight connections.
pub async fn run<S, F>(listener: TcpListener, router: Router<S>, shutdown: F) -> Result<(), Error>
where
    S: Clone + Send + Sync + 'static,
    F: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    let router = Arc::new(router);

    info!(%addr, "todo-hal listening");

    let mut tasks = tokio::task::JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            // Check shutdown first so a SIGTERM stops accepting immediately,
            // even if more connections are queued.
            biased;

            () = &mut shutdown => {
                info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                break;
            }

            res = listener.accept() => {
                let (stream, remote_addr) = match res {
                    Ok(v) => v,
                    Err(e) => {
                        error!("accept error: {e}");
                        continue;
                    }
                };

                debug!(peer = %remote_addr, "connection accepted");
                let router = Arc::clone(&router);
                let io = TokioIo::new(stream);

                tasks.spawn(async move {
                    // Called once per request on the connection.
                    let svc = service_fn(move |req| {
                        let router = Arc::clone(&router);
                        async move { Ok::<_, std::convert::Infallible>(router.respond(req).await) }
                    });

                    // HTTP/1.1 or HTTP/2, whatever the client negotiates.
                    if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                        .serve_connection(io, svc)
                        .await
                    {
                        error!(peer = %remote_addr, "connection error: {e}");
                    }
                });
            }

            // Reap finished connection tasks so the JoinSet does not grow
            // without bound.
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
        }
    }

    while tasks.join_next().await.is_some() {}

    info!("todo-hal stopped");
    Ok(())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT (Ctrl-C) the process receives.
///
/// A signal source that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
