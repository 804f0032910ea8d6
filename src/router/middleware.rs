//! Sequential middleware execution.

use std::sync::Arc;

use log::{trace, warn};

use crate::http::{HttpRequest, HttpResponse};
use crate::router::handler::Middleware;
use crate::router::Error;

/// Run one middleware to completion.
///
/// Resolves once the middleware's future does. A failure is logged and
/// returned as-is.
pub async fn run_middleware(
    middleware: &dyn Middleware,
    req: &mut HttpRequest,
    res: &mut HttpResponse,
) -> Result<(), Error> {
    middleware.call(req, res).await.map_err(|e| {
        warn!("Middleware failed: {e}");
        e
    })
}

/// Run a middleware chain in order, each step starting only after the
/// previous one completed. Stops at the first failure.
pub(crate) async fn run_chain(
    middlewares: &[Arc<dyn Middleware>],
    req: &mut HttpRequest,
    res: &mut HttpResponse,
) -> Result<(), Error> {
    for (index, middleware) in middlewares.iter().enumerate() {
        trace!("Running middleware {index}");
        run_middleware(middleware.as_ref(), req, res).await?;
        trace!("Middleware {index} completed");
    }
    Ok(())
}
