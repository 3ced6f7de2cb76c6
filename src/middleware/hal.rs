//! Response-finalizing step for HAL documents.

use crate::handler::BoxFuture;
use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::response::HAL_JSON;

/// Sets `content-type: application/hal+json; charset=utf-8` on every
/// response, whatever the handler produced. Register it innermost so that it
/// also covers 404s from the router.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalContentType;

impl Middleware for HalContentType {
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a> {
        Box::pin(async move {
            let mut res = next.run(req).await;
            res.set_header("content-type", HAL_JSON);
            res
        })
    }
}
