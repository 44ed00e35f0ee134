//! Router construction and shared application state.

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sitesmith_extractor::Extractor;
use sitesmith_synthesis::Synthesizer;

use crate::handler;

/// Shared application state, cloned per request.
///
/// Both components are stateless across requests; the `Arc`s exist so
/// tests can inject fakes through the capability constructors.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub synthesizer: Arc<Synthesizer>,
}

/// Build the axum router with all Sitesmith endpoints.
pub fn build_router(state: AppState) -> Router {
    // Browser form submissions arrive from arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/generate-template", post(handler::generate_template))
        .route("/health", get(handler::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
