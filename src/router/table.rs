//! The route table builder.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::http::{HttpRequest, HttpResponse, Method};
use crate::router::dispatcher::Dispatcher;
use crate::router::handler::{Handler, HandlerFuture, Middleware};

/// Key of the catch-all handler bound with [`RouteTable::all`].
pub const FALLBACK: &str = "*";

/// Method bindings and middleware shared by a table and its dispatchers.
#[derive(Clone, Default)]
pub(crate) struct Routes {
    pub(crate) handlers: HashMap<String, Arc<dyn Handler>>,
    pub(crate) middlewares: Vec<Arc<dyn Middleware>>,
}

impl Routes {
    /// Bound method keys, sorted, excluding the fallback.
    pub(crate) fn allowed_methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self
            .handlers
            .keys()
            .map(String::as_str)
            .filter(|m| *m != FALLBACK)
            .collect();
        methods.sort_unstable();
        methods
    }
}

/// Accumulates method bindings and an ordered middleware list for one endpoint.
///
/// Registration methods mutate the table in place and hand back `&mut Self`,
/// the same table, so a chain such as `table.get(a).post(b).put(c)` fills one
/// table. This is not an immutable builder: nothing is copied along the chain.
///
/// ```
/// use method_router::{RouteTable, StatusCode};
///
/// let mut table = RouteTable::new();
/// table
///     .post(|_req, res| Box::pin(async move {
///         res.send("Hello world");
///         Ok(())
///     }))
///     .all(|_req, res| Box::pin(async move {
///         res.status(StatusCode::NotFound).send("not found");
///         Ok(())
///     }));
///
/// let dispatcher = table.handle();
/// assert_eq!(dispatcher.methods(), vec!["POST"]);
/// ```
#[derive(Default)]
pub struct RouteTable {
    routes: Routes,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a middleware; it runs after every middleware added before it.
    pub fn use_middleware<F>(&mut self, middleware: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.push_middleware(middleware)
    }

    /// Append a middleware implemented by a named type.
    pub fn push_middleware<M: Middleware>(&mut self, middleware: M) -> &mut Self {
        self.routes.middlewares.push(Arc::new(middleware));
        self
    }

    /// Bind `handler` under `method`.
    ///
    /// Keys are compared exactly: bind uppercase tokens (or a [`Method`]).
    /// A lowercase key is accepted but no well-formed request will match it.
    /// Binding a method twice replaces the earlier handler.
    pub fn route<F>(&mut self, method: impl Into<String>, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route_handler(method, handler)
    }

    /// Bind a handler implemented by a named type under `method`.
    pub fn route_handler<H: Handler>(&mut self, method: impl Into<String>, handler: H) -> &mut Self {
        let method = method.into();
        if self.routes.handlers.insert(method.clone(), Arc::new(handler)).is_some() {
            debug!("Replacing existing handler for {method}");
        }
        self
    }

    /// Route GET requests.
    pub fn get<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(Method::GET, handler)
    }

    /// Route POST requests.
    pub fn post<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(Method::POST, handler)
    }

    /// Route PUT requests.
    pub fn put<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(Method::PUT, handler)
    }

    /// Route PATCH requests.
    pub fn patch<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(Method::PATCH, handler)
    }

    /// Route DELETE requests.
    pub fn delete<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(Method::DELETE, handler)
    }

    /// Fallback for requests whose method has no binding.
    ///
    /// The fallback runs without any middleware.
    pub fn all<F>(&mut self, handler: F) -> &mut Self
    where
        F: for<'a> Fn(&'a mut HttpRequest, &'a mut HttpResponse) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.route(FALLBACK, handler)
    }

    /// Registered method keys, sorted. Includes `"*"` when a fallback is bound.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.routes.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Whether a fallback handler is bound.
    pub fn has_fallback(&self) -> bool {
        self.routes.handlers.contains_key(FALLBACK)
    }

    /// Number of registered middleware.
    pub fn middleware_count(&self) -> usize {
        self.routes.middlewares.len()
    }

    /// Whether no handler is bound at all.
    pub fn is_empty(&self) -> bool {
        self.routes.handlers.is_empty()
    }

    /// Finalize the table into a request handler.
    ///
    /// The dispatcher holds a snapshot of the current bindings and middleware.
    /// Every call yields an independent dispatcher over the same contents;
    /// registrations made afterwards are not visible to dispatchers already
    /// produced, so finish building before serving traffic.
    pub fn handle(&self) -> Dispatcher {
        Dispatcher::new(Arc::new(self.routes.clone()))
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("methods", &self.methods())
            .field("middlewares", &self.middleware_count())
            .finish()
    }
}
