use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Formats a number with thousands separators (dots)
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Logs method, path, status, body size and duration for every request.
///
/// The size comes from `Content-Length`; streamed responses without it are
/// logged as `-`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_number)
        .unwrap_or_else(|| "-".to_string());
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_success() || status.is_redirection() {
        tracing::info!(target: "http", "{} {} {} | {} bytes | {}ms", status.as_u16(), method, path, size, elapsed_ms);
    } else {
        tracing::warn!(target: "http", "{} {} {} | {} bytes | {}ms", status.as_u16(), method, path, size, elapsed_ms);
    }

    response
}
