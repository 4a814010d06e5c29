//! HTTP server implementation using Axum.

use std::sync::{Arc, RwLock};

use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use askpdf_core::config::AskPdfConfig;
use askpdf_core::traits::{Embedder, Generator};
use askpdf_knowledge::store::VectorStore;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub config: AskPdfConfig,
    /// The retrieval store — written once by the startup ingestion task,
    /// read by every request afterwards.
    pub store: Arc<RwLock<VectorStore>>,
    pub embedder: Arc<dyn Embedder>,
    pub generator: Arc<dyn Generator>,
    pub start_time: std::time::Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    let cors = {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        // Only the configured frontend origin may call this API.
        match shared.config.gateway.allowed_origin.parse::<HeaderValue>() {
            Ok(origin) => cors.allow_origin(origin),
            Err(_) => {
                tracing::warn!(
                    "⚠️ Invalid allowed_origin '{}' — CORS will reject all cross-origin requests",
                    shared.config.gateway.allowed_origin
                );
                cors
            }
        }
    };

    Router::new()
        .route("/ask", post(super::routes::ask))
        .route("/health", get(super::routes::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server and run until shutdown.
pub async fn start(state: AppState) -> anyhow::Result<()> {
    let addr = format!(
        "{}:{}",
        state.config.gateway.host, state.config.gateway.port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
