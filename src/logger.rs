use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

// Access log middleware: one stdout line per request, after the handler runs.
pub async fn log_request(request: Request, next: Next) -> Response {

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    println!(
        "{} | {:6} | {:30} | {}",
        timestamp, method, path, response.status()
    );

    response

}
