use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QueryTrait, Set,
    sea_query::Expr,
};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::note;
use crate::db::entities::prelude::Note;

/// Column values written by create and update. Callers validate and default
/// them beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Conjunctive list filter. `category` is an exact match, `search` a
/// substring match on the title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct NoteDao {
    db: DatabaseConnection,
}

impl DaoBase for NoteDao {
    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn entity_name() -> &'static str {
        "Note"
    }
}

impl NoteDao {
    /// Inserts a row and returns the id assigned by the store.
    pub async fn create(&self, fields: NoteFields) -> DaoResult<i32> {
        let NoteFields {
            title,
            description,
            category,
        } = fields;
        let model = note::ActiveModel {
            title: Set(title),
            description: Set(description),
            category: Set(category),
            ..Default::default()
        };
        let result = Note::insert(model).exec(self.db()).await?;
        Ok(result.last_insert_id)
    }

    pub async fn list(&self, filter: NoteFilter) -> DaoResult<Vec<note::Model>> {
        let NoteFilter { category, search } = filter;
        let notes = Note::find()
            .apply_if(category, |query, category| {
                query.filter(note::Column::Category.eq(category))
            })
            .apply_if(search, |query, search| {
                query.filter(note::Column::Title.contains(search))
            })
            .order_by_asc(note::Column::Id)
            .all(self.db())
            .await?;
        Ok(notes)
    }

    /// Replaces title, description and category and stamps `updated_at`
    /// with the store clock.
    pub async fn update(&self, id: i32, fields: NoteFields) -> DaoResult<()> {
        let NoteFields {
            title,
            description,
            category,
        } = fields;
        let result = Note::update_many()
            .col_expr(note::Column::Title, Expr::value(title))
            .col_expr(note::Column::Description, Expr::value(description))
            .col_expr(note::Column::Category, Expr::value(category))
            .col_expr(note::Column::UpdatedAt, Expr::current_timestamp())
            .filter(note::Column::Id.eq(id))
            .exec(self.db())
            .await?;

        if result.rows_affected == 0 {
            return Err(self.not_found(id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> DaoResult<()> {
        let result = Note::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(self.not_found(id));
        }
        Ok(())
    }

    fn not_found(&self, id: i32) -> DaoLayerError {
        DaoLayerError::NotFound {
            entity: Self::entity_name(),
            id,
        }
    }
}
