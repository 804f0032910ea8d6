//! Handler and middleware contracts.

use std::future::Future;
use std::pin::Pin;

use crate::http::{HttpRequest, HttpResponse};
use crate::router::Error;

/// Type alias for a boxed future borrowing the request and response.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Type alias for the future returned by handlers and middleware.
pub type HandlerFuture<'a> = BoxFuture<'a, Result<(), Error>>;

/// The terminal step for a request: inspects the request and writes the response.
///
/// Implemented for every closure of the shape
/// `Fn(&mut HttpRequest, &mut HttpResponse) -> HandlerFuture<'_>`.
/// A handler is invoked at most once per request.
pub trait Handler: Send + Sync + 'static {
    /// Handle the request.
    fn call<'a>(&'a self, req: &'a mut HttpRequest, res: &'a mut HttpResponse) -> HandlerFuture<'a>;
}

impl<F> Handler for F
where
    F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    fn call<'a>(&'a self, req: &'a mut HttpRequest, res: &'a mut HttpResponse) -> HandlerFuture<'a> {
        self(req, res)
    }
}

/// A step run before the matched handler.
///
/// Completion is signalled by the returned future: `Ok(())` lets the next
/// stage start, `Err(e)` stops the chain and `e` is returned to the host
/// unchanged. A future that never completes stalls the request; there is no
/// timeout.
pub trait Middleware: Send + Sync + 'static {
    /// Run this step.
    fn call<'a>(&'a self, req: &'a mut HttpRequest, res: &'a mut HttpResponse) -> HandlerFuture<'a>;
}

impl<F> Middleware for F
where
    F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    fn call<'a>(&'a self, req: &'a mut HttpRequest, res: &'a mut HttpResponse) -> HandlerFuture<'a> {
        self(req, res)
    }
}
