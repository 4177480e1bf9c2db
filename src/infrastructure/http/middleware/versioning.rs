//! API version prefix interceptor

use async_trait::async_trait;
use axum::{
    extract::Request,
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::Interceptor;
use crate::infrastructure::http::error::ApiError;

/// Requires every path to start with `/v{version}` and strips that prefix
///
/// `/v1` matches `/v1` and `/v1/...` but not `/v10/...`.
pub struct Versioning {
    prefix: String,
}

impl Versioning {
    pub fn new(version: &str) -> Self {
        Self {
            prefix: format!("/v{}", version.trim_start_matches('v')),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Path with the version prefix removed, or `None` if it does not match
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        match path.strip_prefix(self.prefix.as_str())? {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}

fn rewrite_path(uri: &Uri, path: &str) -> Result<Uri, ApiError> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(
        path_and_query
            .parse()
            .map_err(|_| ApiError::BadRequest("Invalid request path".to_string()))?,
    );
    Uri::from_parts(parts).map_err(|_| ApiError::BadRequest("Invalid request path".to_string()))
}

#[async_trait]
impl Interceptor for Versioning {
    fn name(&self) -> &'static str {
        "versioning"
    }

    async fn handle(&self, mut request: Request, next: Next) -> Response {
        let Some(path) = self.strip(request.uri().path()) else {
            tracing::debug!(
                path = %request.uri().path(),
                prefix = %self.prefix,
                "Request outside API version prefix"
            );
            return ApiError::NotFound("Not found".to_string()).into_response();
        };

        match rewrite_path(request.uri(), path) {
            Ok(uri) => {
                *request.uri_mut() = uri;
                next.run(request).await
            }
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::middleware::MiddlewareStack;
    use axum::{
        body::Body,
        extract::RawQuery,
        http::StatusCode,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    #[test]
    fn test_strip() {
        let versioning = Versioning::new("1");
        assert_eq!(versioning.prefix(), "/v1");
        assert_eq!(versioning.strip("/v1/devices"), Some("/devices"));
        assert_eq!(versioning.strip("/v1"), Some("/"));
        assert_eq!(versioning.strip("/v10/devices"), None);
        assert_eq!(versioning.strip("/devices"), None);
        assert_eq!(Versioning::new("v2").prefix(), "/v2");
    }

    fn app() -> Router {
        let router = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .route(
                "/echo",
                get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
            );
        MiddlewareStack::new().with(Versioning::new("1")).apply(router)
    }

    async fn get_status(uri: &str) -> (StatusCode, String) {
        let request = axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_prefixed_request_reaches_router() {
        let (status, body) = get_status("/v1/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_unprefixed_request_is_404() {
        assert_eq!(get_status("/ping").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get_status("/v2/ping").await.0, StatusCode::NOT_FOUND);
        assert_eq!(get_status("/v10/ping").await.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_query_string_is_preserved() {
        let (status, body) = get_status("/v1/echo?state=in-use&brand=Acme").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "state=in-use&brand=Acme");
    }
}
