// HTTP status surface served in production mode

use anyhow::{Context, Result};
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use homegenie_core::{HealthStatus, SERVICE_NAME};
use homegenie_mcp::tools::ToolRegistry;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

/// Start the HTTP server
pub async fn serve(config: &ServerConfig, registry: Arc<ToolRegistry>) -> Result<()> {
    let app = create_router(AppState { registry });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the API router
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health probe for orchestrators
async fn health() -> impl IntoResponse {
    Json(HealthStatus::current())
}

/// Service banner with the advertised tool set
async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(root_payload(&state.registry))
}

fn root_payload(registry: &ToolRegistry) -> serde_json::Value {
    serde_json::json!({
        "service": SERVICE_NAME,
        "status": "running",
        "tools": registry.tool_names(),
        "version": env!("CARGO_PKG_VERSION"),
    })
}
