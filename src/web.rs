//! The network-facing search endpoint and static asset serving
//!
//! One handler serves every caller; there is no authenticated variant with
//! different behavior. Business-level outcomes (no matches, provider
//! failures) always come back as a rendered 200 fragment; only malformed
//! requests are rejected, by the framework's own extractors.

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Form, State},
    response::Html,
    routing::post,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::render;
use crate::search::SearchService;

/// Shared per-process state behind the router
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

/// Search request body; the term is optional and defaults to match-all
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    search: String,
}

/// Build the application router: the search endpoint plus the static
/// search page and browser script
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", post(search_cities))
        .fallback_service(ServeDir::new("assets"))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn run(port: u16, state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Search endpoint running at http://localhost:{}", port);
    axum::serve(listener, router(state))
        .await
        .with_context(|| "Server terminated unexpectedly")?;
    Ok(())
}

async fn search_cities(
    State(state): State<AppState>,
    Form(request): Form<SearchRequest>,
) -> Html<String> {
    let term = sanitize_term(&request.search);
    info!("Handling search for '{}'", term);

    let rows = state.search.search(&term).await;
    Html(render::render_rows(&rows))
}

/// Strip control characters and surrounding whitespace from the raw term
fn sanitize_term(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    cleaned.trim().to_string()
}
