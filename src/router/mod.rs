//! Method-based request dispatch.
//!
//! A [`RouteTable`] collects one handler per HTTP method plus an ordered list
//! of middleware for a single endpoint. [`RouteTable::handle`] turns it into a
//! [`Dispatcher`], the one entry point a host calls per request.

mod dispatcher;
mod error;
mod handler;
mod middleware;
mod table;

// Re-export public items
pub use dispatcher::{Dispatcher, Resolution, METHOD_NOT_ALLOWED_BODY};
pub use error::{BoxError, Error};
pub use handler::{BoxFuture, Handler, HandlerFuture, Middleware};
pub use middleware::run_middleware;
pub use table::{RouteTable, FALLBACK};
