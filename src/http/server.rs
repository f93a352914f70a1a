//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the single proxy handler
//! - Wire up middleware (request ID, tracing, CORS headers)
//! - Bind server to listener and serve until shutdown
//! - Short-circuit CORS preflight, dispatch data requests to the cache handler

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::request::{self, MakeRequestUuidV4};
use crate::http::response;
use crate::observability::metrics;
use crate::proxy::ProxyCacheHandler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ProxyCacheHandler>,
}

/// HTTP server for the fundraising proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    handler: Arc<ProxyCacheHandler>,
}

impl HttpServer {
    /// Create a new HTTP server talking to the configured upstream.
    pub fn new(config: ProxyConfig) -> Self {
        let handler = ProxyCacheHandler::from_config(&config);
        Self::with_handler(config, handler)
    }

    /// Create a server around an already-built cache handler.
    pub fn with_handler(config: ProxyConfig, handler: ProxyCacheHandler) -> Self {
        let handler = Arc::new(handler);
        let state = AppState {
            handler: handler.clone(),
        };
        let router = Self::build_router(state);
        Self {
            router,
            config,
            handler,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(proxy_handler))
            .route("/{*path}", any(proxy_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(SetResponseHeaderLayer::overriding(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN,
                        HeaderValue::from_static("*"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::ACCESS_CONTROL_ALLOW_METHODS,
                        HeaderValue::from_static("GET, OPTIONS"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::ACCESS_CONTROL_ALLOW_HEADERS,
                        HeaderValue::from_static("Content-Type"),
                    )),
            )
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            cache_ttl_ms = self.config.cache.ttl_ms,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared cache handler backing the router.
    pub fn handler(&self) -> Arc<ProxyCacheHandler> {
        self.handler.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Single proxy route: preflight short-circuit, otherwise cached or fresh payload.
async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let request_id = request::request_id(&headers);

    if method == Method::OPTIONS {
        tracing::debug!(request_id = %request_id, "Preflight request");
        let response = response::preflight();
        metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
        return response;
    }

    let response = match state.handler.payload().await {
        Ok((body, source)) => {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                source = ?source,
                "Serving payload"
            );
            response::json_payload(body)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "Upstream refresh failed"
            );
            e.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}
