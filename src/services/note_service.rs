use crate::{
    db::{
        dao::{NoteDao, NoteFields, NoteFilter},
        entities::note,
    },
    error::AppError,
};

pub const DEFAULT_CATEGORY: &str = "Others";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and description are required";
pub const NOTE_NOT_FOUND_MESSAGE: &str = "Note not found";

/// Body of a create or update as received. A `None` field was absent or
/// falsy in the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl NoteInput {
    /// Requires title and description and falls back to
    /// [`DEFAULT_CATEGORY`] when no category was given.
    pub fn into_fields(self) -> Result<NoteFields, AppError> {
        let NoteInput {
            title,
            description,
            category,
        } = self;
        let (Some(title), Some(description)) = (present(title), present(description)) else {
            return Err(AppError::bad_request(REQUIRED_FIELDS_MESSAGE));
        };
        let category = present(category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(NoteFields {
            title,
            description,
            category,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[derive(Clone)]
pub struct NoteService {
    note_dao: NoteDao,
}

impl NoteService {
    pub fn new(note_dao: NoteDao) -> Self {
        Self { note_dao }
    }

    pub async fn create(&self, fields: NoteFields) -> Result<i32, AppError> {
        let id = self.note_dao.create(fields).await?;
        tracing::debug!(note_id = id, "note created");
        Ok(id)
    }

    pub async fn list(&self, filter: NoteFilter) -> Result<Vec<note::Model>, AppError> {
        Ok(self.note_dao.list(filter).await?)
    }

    pub async fn update(&self, id: i32, fields: NoteFields) -> Result<(), AppError> {
        self.note_dao.update(id, fields).await?;
        tracing::debug!(note_id = id, "note updated");
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.note_dao.delete(id).await?;
        tracing::debug!(note_id = id, "note deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{DEFAULT_CATEGORY, NOTE_NOT_FOUND_MESSAGE, NoteInput, REQUIRED_FIELDS_MESSAGE};
    use crate::{db::dao::NoteFields, services::ServiceContext};

    fn input(title: Option<&str>, description: Option<&str>, category: Option<&str>) -> NoteInput {
        NoteInput {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn missing_category_defaults_to_others() {
        let fields = input(Some("A"), Some("B"), None)
            .into_fields()
            .expect("input should validate");
        assert_eq!(fields.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn empty_category_defaults_to_others() {
        let fields = input(Some("A"), Some("B"), Some(""))
            .into_fields()
            .expect("input should validate");
        assert_eq!(fields.category, "Others");
    }

    #[test]
    fn explicit_category_is_kept() {
        let fields = input(Some("A"), Some("B"), Some("Work"))
            .into_fields()
            .expect("input should validate");
        assert_eq!(fields.title, "A");
        assert_eq!(fields.description, "B");
        assert_eq!(fields.category, "Work");
    }

    #[test]
    fn title_and_description_are_required() {
        for case in [
            input(None, Some("B"), None),
            input(Some("A"), None, None),
            input(Some(""), Some("B"), None),
            input(Some("A"), Some(""), Some("Work")),
        ] {
            let err = case.into_fields().expect_err("input should be rejected");
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), REQUIRED_FIELDS_MESSAGE);
        }
    }

    #[tokio::test]
    async fn update_of_missing_note_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let service = ServiceContext::new(&db).note();

        let err = service
            .update(999_999, NoteFields {
                title: "A".to_string(),
                description: "B".to_string(),
                category: "Others".to_string(),
            })
            .await
            .expect_err("update should fail");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), NOTE_NOT_FOUND_MESSAGE);
    }
}
