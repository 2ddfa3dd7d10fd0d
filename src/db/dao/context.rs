use sea_orm::DatabaseConnection;

use super::{DaoBase, NoteDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn note(&self) -> NoteDao {
        DaoBase::new(&self.db)
    }
}
