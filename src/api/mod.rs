//! HTTP API module for the items service
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /items` — list items
//! - `POST /items?item=<value>` — append an item
//! - `GET /metrics` — Prometheus metrics
//!
//! Every request, matched or not, passes through [`middleware::track_requests`].

pub mod handlers;
pub mod middleware;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::metrics::MetricsRegistry;
use crate::store::ItemStore;

/// Application state shared with endpoints
pub struct AppState {
    pub metrics: MetricsRegistry,
    pub items: ItemStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: MetricsRegistry::new(),
            items: ItemStore::new(),
        }
    }
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::add_item),
        )
        .route("/metrics", get(handlers::metrics_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::track_requests,
        ))
        .with_state(state)
}
