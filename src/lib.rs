//! A minimal per-endpoint HTTP method dispatcher.
//!
//! Bind one handler per HTTP method, add middleware that runs in order before
//! the matched handler, and finalize everything into a single request handler
//! that the hosting framework invokes for each request.
//!
//! # Features
//!
//! - Method bindings for GET, POST, PUT, PATCH and DELETE, or any custom token
//! - A `"*"` fallback for methods without a binding (middleware is skipped)
//! - Sequential middleware with explicit success/failure completion
//! - `405 Method not allowed` with an `Allow` header when nothing matches
//! - Middleware and handler errors are returned to the host untouched
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use method_router::{HttpRequest, HttpResponse, RouteTable, StatusCode};
//!
//! # tokio_test_block(async {
//! let mut table = RouteTable::new();
//! table
//!     .post(|_req, res| Box::pin(async move {
//!         res.send("Hello world");
//!         Ok(())
//!     }))
//!     .get(|_req, res| Box::pin(async move {
//!         res.send("get request");
//!         Ok(())
//!     }));
//!
//! let dispatcher = table.handle();
//!
//! let mut req = HttpRequest::new("GET");
//! let mut res = HttpResponse::new();
//! dispatcher.dispatch(&mut req, &mut res).await.unwrap();
//! assert_eq!(res.body_str(), Some("get request"));
//!
//! let mut req = HttpRequest::new("DELETE");
//! let mut res = HttpResponse::new();
//! dispatcher.dispatch(&mut req, &mut res).await.unwrap();
//! assert_eq!(res.status_code(), StatusCode::MethodNotAllowed);
//! assert_eq!(res.body_str(), Some("Method not allowed"));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
//! ## Middleware
//!
//! ```
//! use method_router::{RouteTable, RouterError, StatusCode};
//!
//! let mut table = RouteTable::new();
//! table
//!     .use_middleware(|req, _res| Box::pin(async move {
//!         if req.has_header("Authorization") {
//!             Ok(())
//!         } else {
//!             Err(RouterError::rejected(StatusCode::Unauthorized, "missing credentials"))
//!         }
//!     }))
//!     .get(|_req, res| Box::pin(async move {
//!         res.send("secret");
//!         Ok(())
//!     }));
//!
//! let _dispatcher = table.handle();
//! ```
//!
//! See `demos/hello.rs` for a complete program.

// Export the http module
pub mod http;

// Export the router module
pub mod router;

// Re-export commonly used items for convenience
pub use http::{Error as HttpError, HttpRequest, HttpResponse, Method, StatusCode};
pub use router::{
    Dispatcher, Error as RouterError, Handler, Middleware, Resolution, RouteTable, FALLBACK,
};
