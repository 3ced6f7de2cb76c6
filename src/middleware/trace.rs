//! Per-request logging.

use std::time::{Duration, Instant};

use tracing::{info, info_span, Instrument};

use crate::handler::BoxFuture;
use crate::middleware::{Middleware, Next};
use crate::request::Request;

/// Emits one `info` event per request with method, path, status and latency,
/// inside a `request` span so handler logs inherit the same fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl Middleware for Trace {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
        let method = req.method();
        let path = req.original_url().to_owned();
        let span = info_span!("request", %method, %path);

        Box::pin(
            async move {
                let started = Instant::now();
                let res = next.run(req).await;
                info!(
                    status = res.status_code(),
                    latency_us = micros(started.elapsed()),
                    "served"
                );
                res
            }
            .instrument(span),
        )
    }
}

/// Whole microseconds, saturating at `u64::MAX`.
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_saturates_instead_of_wrapping() {
        assert_eq!(micros(Duration::from_millis(3)), 3_000);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }
}
