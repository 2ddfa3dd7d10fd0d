use tower_http::cors::CorsLayer;

/// Every origin, method and header is accepted.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
