//! HTTP Middleware
//!
//! Request interceptors composed into a fixed-order pipeline:
//! - `Versioning`: optional `/v{N}` prefix check and stripping
//! - `RequestLogging`: method, path, status and latency of every request
//! - `PanicRecovery`: turns a panic in any inner layer into a 500

mod logging;
mod recovery;
mod versioning;

pub use logging::RequestLogging;
pub use recovery::PanicRecovery;
pub use versioning::Versioning;

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};
use std::sync::Arc;

/// A single middleware element
///
/// `next` runs the rest of the pipeline and finally the router.
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn handle(&self, request: Request, next: Next) -> Response;
}

/// Ordered list of interceptors; the first one added is the outermost
#[derive(Clone, Default)]
pub struct MiddlewareStack {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl MiddlewareStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Versioning (when configured), then logging, then panic recovery
    pub fn standard(api_version: Option<&str>) -> Self {
        let mut stack = Self::new();
        if let Some(version) = api_version {
            stack = stack.with(Versioning::new(version));
        }
        stack.with(RequestLogging).with(PanicRecovery)
    }

    pub fn with(mut self, interceptor: impl Interceptor) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Wrap `router` in every interceptor.
    ///
    /// The router is mounted as the fallback of an outer router so that
    /// interceptors run before route matching and may rewrite the URI.
    pub fn apply(&self, router: Router) -> Router {
        let mut app = Router::new().fallback_service(router);
        // Router::layer wraps from the inside out
        for interceptor in self.interceptors.iter().rev() {
            app = app.layer(from_fn_with_state(interceptor.clone(), run_interceptor));
        }
        app
    }
}

async fn run_interceptor(
    State(interceptor): State<Arc<dyn Interceptor>>,
    request: Request,
    next: Next,
) -> Response {
    interceptor.handle(request, next).await
}
