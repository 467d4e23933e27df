use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;

// Same default cap as Express's json() body parser
const JSON_BODY_LIMIT: usize = 100 * 1024;

// Buffer and parse JSON request bodies for every route.
// The parsed value lands in request extensions so future routes
// can pick it up; the current routes never read it.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, (StatusCode, String)> {

    if !has_json_content_type(&request) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|_| (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds the {} byte limit", JSON_BODY_LIMIT)
        ))?;

    let parsed: Option<Value> = if bytes.is_empty() {
        None
    } else {
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e)))?;
        Some(value)
    };

    // hand the handler back an equivalent request with the body restored
    let mut request = Request::from_parts(parts, Body::from(bytes));
    if let Some(value) = parsed {
        request.extensions_mut().insert(value);
    }

    Ok(next.run(request).await)

}

fn has_json_content_type(request: &Request) -> bool {

    request.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false)

}
