//! Drives a handful of in-memory requests through a single endpoint.
//!
//! Run with `RUST_LOG=debug cargo run --example hello` to see dispatch decisions.

use log::info;
use method_router::{HttpRequest, HttpResponse, RouteTable, RouterError, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let mut table = RouteTable::new();
    table
        // Log every routed request
        .use_middleware(|req, _res| {
            Box::pin(async move {
                info!("{} {}", req.method_token(), req.path);
                Ok(())
            })
        })
        // Refuse requests flagged as blocked
        .use_middleware(|req, _res| {
            Box::pin(async move {
                if req.has_header("X-Blocked") {
                    return Err(RouterError::rejected(StatusCode::Forbidden, "client is blocked"));
                }
                Ok(())
            })
        })
        .post(|_req, res| {
            Box::pin(async move {
                res.send("Hello world");
                Ok(())
            })
        })
        .get(|req, res| {
            Box::pin(async move {
                let name = req.query_param("name").unwrap_or("world").to_string();
                res.content_type("text/plain").send(format!("get request from {name}"));
                Ok(())
            })
        })
        .all(|_req, res| {
            Box::pin(async move {
                res.status(StatusCode::NotFound).send("not found");
                Ok(())
            })
        });

    let hello = table.handle();

    let requests = vec![
        HttpRequest::new("POST").with_path("/api/hello"),
        HttpRequest::new("GET").with_path("/api/hello?name=Ada"),
        HttpRequest::new("DELETE").with_path("/api/hello"),
        HttpRequest::new("GET").with_path("/api/hello").with_header("X-Blocked", "1"),
    ];

    for mut req in requests {
        let mut res = HttpResponse::new();
        // Play the host: translate propagated errors into a response
        if let Err(e) = hello.dispatch(&mut req, &mut res).await {
            res.status(e.status_hint()).send(e.to_string());
        }
        println!(
            "{} {} -> {} {}",
            req.method_token(),
            req.path,
            res.status_code(),
            res.body_str().unwrap_or_default()
        );
    }

    Ok(())
}
