mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::data::LaunchTable;

pub use handlers::{ChartResponse, Health};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    table: Arc<LaunchTable>,
}

impl AppState {
    pub fn new(table: LaunchTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }
}

pub fn create_router(table: LaunchTable) -> Router {
    let api = Router::new()
        // Page controls
        .route("/controls", get(handlers::get_controls))
        // Charts
        .route("/charts/success-pie", get(handlers::success_pie))
        .route("/charts/payload-scatter", get(handlers::payload_scatter))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(table))
}
