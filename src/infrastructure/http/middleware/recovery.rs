//! Panic recovery interceptor

use async_trait::async_trait;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

use super::Interceptor;
use crate::infrastructure::http::error::ApiError;

/// Converts a panic raised while handling a request into a 500 response
pub struct PanicRecovery;

#[async_trait]
impl Interceptor for PanicRecovery {
    fn name(&self) -> &'static str {
        "recovery"
    }

    async fn handle(&self, request: Request, next: Next) -> Response {
        let method = request.method().clone();
        let uri = request.uri().clone();

        match AssertUnwindSafe(next.run(request)).catch_unwind().await {
            Ok(response) => response,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(method = %method, uri = %uri, panic = %message, "Recovered from panic");
                ApiError::Internal(format!("panic: {}", message)).into_response()
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::middleware::MiddlewareStack;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::util::ServiceExt;

    async fn panicking_handler() -> &'static str {
        panic!("handler blew up")
    }

    fn request(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn app() -> Router {
        let router = Router::new()
            .route("/panic", get(panicking_handler))
            .route("/ok", get(|| async { "OK" }));
        MiddlewareStack::new().with(PanicRecovery).apply(router)
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let response = app().oneshot(request("/panic")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_router_keeps_serving_after_panic() {
        let app = app();

        let _ = app.clone().oneshot(request("/panic")).await.unwrap();

        let response = app.oneshot(request("/ok")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(boxed.as_ref()), "static message");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(boxed.as_ref()), "owned message");
        let boxed: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }
}
