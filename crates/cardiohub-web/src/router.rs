//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    codons::{api_codons, codons_page, codons_submit},
    database::database_page,
    gc::{api_gc, gc_page, gc_submit},
    genes::{api_genes, genes_page},
    heart::{api_heart_rate, heart_rate_page, heart_rate_submit},
    overview::overview,
    phylo::phylo_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);
    let static_dir = shared.config.server.static_dir.clone();

    Router::new()
        // Pages
        .route("/",           get(overview))
        .route("/genes",      get(genes_page))
        .route("/database",   get(database_page))
        .route("/gc",         get(gc_page).post(gc_submit))
        .route("/heart-rate", get(heart_rate_page).post(heart_rate_submit))
        .route("/codons",     get(codons_page).post(codons_submit))
        .route("/phylo",      get(phylo_page))

        // API endpoints
        .route("/api/genes",      get(api_genes))
        .route("/api/gc",         get(api_gc))
        .route("/api/heart-rate", get(api_heart_rate))
        .route("/api/codons",     get(api_codons))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
