mod config;
mod handlers;
mod logger;
mod middleware;

use axum::middleware::from_fn;
use axum::routing::{get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

// json parsing runs for every route, access logging wraps
// the whole exchange (layers apply bottom-up)
fn app() -> Router {

    Router::new()
        .route("/", get(handlers::root))
        .layer(from_fn(middleware::parse_json_body))
        .layer(from_fn(logger::log_request))

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let port = config::resolve_port();

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let listener = TcpListener::bind(addr).await
        .unwrap_or_else(|e| panic!("Failed to bind to port {}: {}", port, e));
    println!("Server running on port {}", port);
    axum::serve(listener, app()).await
        .expect("Server failed");

}
