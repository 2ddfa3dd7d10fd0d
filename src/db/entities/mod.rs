#[allow(unused_imports)]
pub mod prelude {
    pub use super::note::Entity as Note;
}

pub mod note;
