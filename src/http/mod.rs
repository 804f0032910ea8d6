//! Host-facing HTTP types.
//!
//! The hosting framework builds these from the wire; the router only reads
//! the request's method and writes into the response.

mod error;
mod method;
mod request;
mod response;
mod tests;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::HttpRequest;
pub use response::{HttpResponse, StatusCode};
