mod cors;
mod panic;

pub use cors::cors_layer;
pub use panic::catch_panic_layer;
