//! Request logging interceptor

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use super::Interceptor;

/// Logs every request with its status and latency
///
/// 5xx at error level, 4xx at warn, everything else at info.
pub struct RequestLogging;

#[async_trait]
impl Interceptor for RequestLogging {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn handle(&self, request: Request, next: Next) -> Response {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let started = Instant::now();

        let response = next.run(request).await;
        let status = response.status();
        let duration_ms = started.elapsed().as_millis() as u64;

        if status.is_server_error() {
            tracing::error!(
                method = %method,
                uri = %uri,
                status = status.as_u16(),
                duration_ms,
                "HTTP server error"
            );
        } else if status.is_client_error() {
            tracing::warn!(
                method = %method,
                uri = %uri,
                status = status.as_u16(),
                duration_ms,
                "HTTP client error"
            );
        } else {
            tracing::info!(
                method = %method,
                uri = %uri,
                status = status.as_u16(),
                duration_ms,
                "HTTP request"
            );
        }

        response
    }
}
