use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use super::AppState;

/// Counts and times every request, then logs method and path.
///
/// Metrics are recorded after the inner handler completes, whatever its
/// status code.
pub async fn track_requests(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    state.metrics.record_request(start.elapsed());
    tracing::info!("{} {}", method, path);

    response
}
