use sea_orm::DatabaseConnection;

/// Common shape of the data-access objects: each one wraps a clone of the
/// shared connection handle and names the entity it reports on.
pub trait DaoBase: Clone + Send + Sync + Sized {
    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    fn entity_name() -> &'static str;
}
