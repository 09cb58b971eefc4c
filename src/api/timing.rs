//! Request timing middleware.

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Header carrying the handling time, e.g. `0.0012 sec`.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Stamp every response with the time spent producing it.
pub async fn process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = format!("{:0.4} sec", start.elapsed().as_secs_f64());
    if let Ok(value) = HeaderValue::from_str(&elapsed) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    response
}
