mod entry;
pub mod notes;
pub mod truthy;

pub use entry::{app, router};
