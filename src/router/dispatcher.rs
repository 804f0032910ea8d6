//! Per-request resolution.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::http::{HttpRequest, HttpResponse, StatusCode};
use crate::router::handler::{Handler, HandlerFuture};
use crate::router::middleware::run_chain;
use crate::router::table::{Routes, FALLBACK};
use crate::router::Error;

/// Body written when no handler matches and no fallback is bound.
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method not allowed";

/// How a method token resolves against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A handler is bound under the exact token; middleware runs first.
    Matched(String),
    /// No exact binding; the fallback runs without middleware.
    Fallback,
    /// No exact binding and no fallback; the dispatcher answers 405.
    MethodNotAllowed,
}

enum Selected<'r> {
    Matched(&'r Arc<dyn Handler>),
    Fallback(&'r Arc<dyn Handler>),
    NotAllowed,
}

/// The finalized request handler produced by [`RouteTable::handle`](crate::RouteTable::handle).
///
/// Cloning is cheap and every clone dispatches over the same frozen table.
/// A dispatcher is itself a [`Handler`], so a host can treat it as its single
/// `(request, response)` entry point.
#[derive(Clone)]
pub struct Dispatcher {
    routes: Arc<Routes>,
}

impl Dispatcher {
    pub(crate) fn new(routes: Arc<Routes>) -> Self {
        Self { routes }
    }

    /// Bound method keys, sorted, excluding the fallback.
    pub fn methods(&self) -> Vec<&str> {
        self.routes.allowed_methods()
    }

    /// Resolve a method token without running anything.
    pub fn resolve(&self, method: &str) -> Resolution {
        match self.select(method) {
            Selected::Matched(_) => Resolution::Matched(method.to_string()),
            Selected::Fallback(_) => Resolution::Fallback,
            Selected::NotAllowed => Resolution::MethodNotAllowed,
        }
    }

    fn select(&self, method: &str) -> Selected<'_> {
        if let Some(handler) = self.routes.handlers.get(method) {
            return Selected::Matched(handler);
        }
        match self.routes.handlers.get(FALLBACK) {
            Some(fallback) => Selected::Fallback(fallback),
            None => Selected::NotAllowed,
        }
    }

    /// Dispatch one request.
    ///
    /// On an exact method match, every middleware runs in registration order,
    /// each awaited before the next starts, then the handler runs. Without a
    /// match the fallback runs directly, skipping middleware; without a
    /// fallback the response becomes `405 Method not allowed`.
    ///
    /// Middleware and handler failures are returned unchanged. Nothing is
    /// written to the response on their behalf.
    pub async fn dispatch(&self, req: &mut HttpRequest, res: &mut HttpResponse) -> Result<(), Error> {
        match self.select(req.method_token()) {
            Selected::Matched(handler) => {
                debug!(
                    "Dispatching {method} through {count} middleware",
                    method = req.method_token(),
                    count = self.routes.middlewares.len()
                );
                run_chain(&self.routes.middlewares, req, res).await?;
                handler.call(req, res).await.map_err(|e| {
                    warn!("Handler for {method} failed: {e}", method = req.method_token());
                    e
                })
            }
            Selected::Fallback(fallback) => {
                debug!("No handler for {:?}, using fallback", req.method_token());
                fallback.call(req, res).await.map_err(|e| {
                    warn!("Fallback handler failed: {e}");
                    e
                })
            }
            Selected::NotAllowed => {
                debug!("No handler for {:?}, responding 405", req.method_token());
                self.method_not_allowed(res);
                Ok(())
            }
        }
    }

    fn method_not_allowed(&self, res: &mut HttpResponse) {
        res.status(StatusCode::MethodNotAllowed)
            .header("Allow", self.methods().join(", "))
            .content_type("text/plain")
            .send(METHOD_NOT_ALLOWED_BODY);
    }
}

impl Handler for Dispatcher {
    fn call<'a>(&'a self, req: &'a mut HttpRequest, res: &'a mut HttpResponse) -> HandlerFuture<'a> {
        Box::pin(self.dispatch(req, res))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("methods", &self.methods())
            .field("fallback", &self.routes.handlers.contains_key(FALLBACK))
            .field("middlewares", &self.routes.middlewares.len())
            .finish()
    }
}
