//! HTTP surface of the plugin.
//!
//! [`create_router`] builds the route tree a host mounts into its own
//! server. [`serve`] wraps that router in a small standalone server for
//! development and integration testing against the in-memory host.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::host::{ElevationPolicy, LibraryManager, SegmentManager};
use crate::segments::ProviderRegistry;

pub mod auth;
pub mod openapi;
pub mod routes_segments;

/// Shared plugin context handed to every handler.
#[derive(Clone)]
pub struct PluginContext {
    /// Host-owned segment store.
    pub segment_manager: Arc<dyn SegmentManager>,
    /// Host-owned library catalogue.
    pub library_manager: Arc<dyn LibraryManager>,
    /// Segment providers installed on the host, this plugin's included.
    pub providers: Arc<ProviderRegistry>,
    /// Host policy guarding every route.
    pub policy: Arc<dyn ElevationPolicy>,
}

/// Create the Axum router with all plugin routes.
///
/// Every route sits behind the context's elevation policy. The returned
/// router carries no outer layers besides tracing, so hosts can mount it
/// wherever their plugin surface lives.
pub fn create_router(ctx: PluginContext) -> Router {
    let routes = routes_segments::segment_routes().layer(middleware::from_fn_with_state(
        ctx.clone(),
        auth::require_elevation,
    ));

    Router::new()
        .merge(routes)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Start the standalone development server.
///
/// Besides the plugin routes this serves an unauthenticated health probe
/// and the OpenAPI document, the pieces a surrounding host server would
/// normally provide.
pub async fn serve(config: &Config, ctx: PluginContext) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(create_router(ctx))
        .layer(cors);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
