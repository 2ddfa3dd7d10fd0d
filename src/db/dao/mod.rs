pub mod base;
mod context;
pub mod error;
pub mod note_dao;

pub use base::DaoBase;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use note_dao::{NoteDao, NoteFields, NoteFilter};
