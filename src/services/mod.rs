pub mod context;
pub mod note_service;

pub use context::ServiceContext;
