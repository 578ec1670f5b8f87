use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::dispatch;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // One logical endpoint: every path and verb lands in the dispatch
    // handler, which selects the operation from the query string.
    Router::new()
        .fallback(dispatch::dispatch)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
