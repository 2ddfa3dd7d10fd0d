use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, cors_layer},
    state::AppState,
};

use super::notes;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().merge(notes::router(state))
}

/// The router wrapped in the middleware stack the server runs with.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(catch_panic_layer())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
