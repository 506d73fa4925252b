//! Shared application state for the web server.

use std::sync::Arc;

use cardiohub_common::AppConfig;
use cardiohub_genes::GeneStore;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: AppConfig,
    /// Read-through snapshot of the gene spreadsheet.
    pub genes: GeneStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let genes = GeneStore::new(config.dataset.path.clone());
        Self { config, genes }
    }
}

pub type SharedState = Arc<AppState>;
