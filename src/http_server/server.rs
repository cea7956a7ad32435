//! # HTTP Server
//!
//! Main HTTP server: employee routes wrapped in tracing, panic catching and
//! request timeout layers. Routing failures (unknown path, wrong method)
//! are answered with the same JSON error body as handler failures.

use std::sync::Arc;

use axum::error_handling::HandleErrorLayer;
use axum::middleware::map_response;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::employee_routes::{employee_routes, EmployeeState};
use super::errors::{
    handle_middleware_error, handle_panic, method_not_allowed_as_json, route_not_found,
};

/// HTTP Server for the employee API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(EmployeeState::new()))
    }

    /// Create a new HTTP server over existing state
    pub fn with_state(config: HttpServerConfig, state: Arc<EmployeeState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<EmployeeState>) -> Router {
        let router = Router::new()
            .merge(employee_routes(state))
            .fallback(route_not_found)
            .layer(map_response(method_not_allowed_as_json));

        with_middleware(router, config)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, returning once Ctrl+C has been received and
    /// in-flight requests have finished
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;

        tracing::info!(addr = %self.config.socket_addr(), "bound listener");
        tracing::info!("server listening on http://localhost:{}", self.config.port);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a router in the request tracing, panic and timeout layers
fn with_middleware(router: Router, config: &HttpServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .timeout(config.request_timeout()),
    )
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl+C, shutting down"),
        Err(e) => tracing::error!(error = %e, "failed to listen for Ctrl+C"),
    }
}
