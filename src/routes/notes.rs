use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    db::{dao::NoteFilter, entities::note},
    error::AppError,
    response::{ApiResult, JsonResponse, MessageBody},
    routes::truthy::truthy_text,
    services::{
        ServiceContext,
        note_service::{NOTE_NOT_FOUND_MESSAGE, NoteInput, NoteService},
    },
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    #[serde(default, deserialize_with = "truthy_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListNotesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedNote {
    pub note_id: i32,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notes", post(create_note).get(list_notes))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .with_state(state)
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<CreatedNote> {
    let fields = NoteInput::from(note_payload(body)?).into_fields()?;
    let service = note_service_from_state(state.as_ref());
    let note_id = service.create(fields).await?;
    JsonResponse::with_status(StatusCode::CREATED, CreatedNote { note_id })
}

async fn list_notes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListNotesQuery>, QueryRejection>,
) -> ApiResult<Vec<NoteResponse>> {
    let Query(query) = query?;
    let service = note_service_from_state(state.as_ref());
    let notes = service.list(query.into()).await?;
    JsonResponse::ok(notes.into_iter().map(NoteResponse::from).collect())
}

async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<NotePayload>, JsonRejection>,
) -> ApiResult<MessageBody> {
    // A bad body is a 400 even when the id matches nothing.
    let fields = NoteInput::from(note_payload(body)?).into_fields()?;
    let id = parse_note_id(&id)?;
    let service = note_service_from_state(state.as_ref());
    service.update(id, fields).await?;
    JsonResponse::ok(MessageBody::new("Note updated successfully"))
}

async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    let id = parse_note_id(&id)?;
    let service = note_service_from_state(state.as_ref());
    service.delete(id).await?;
    JsonResponse::ok(MessageBody::new("Note deleted successfully"))
}

/// A body sent without a JSON content type reads as an empty object, which
/// the required-field check then rejects.
fn note_payload(body: Result<Json<NotePayload>, JsonRejection>) -> Result<NotePayload, AppError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(NotePayload::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Ids that are not integers cannot match a row, so they are reported the
/// same way as a missing row.
fn parse_note_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::not_found(NOTE_NOT_FOUND_MESSAGE))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl From<NotePayload> for NoteInput {
    fn from(payload: NotePayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            category: payload.category,
        }
    }
}

impl From<ListNotesQuery> for NoteFilter {
    fn from(query: ListNotesQuery) -> Self {
        Self {
            category: non_empty(query.category),
            search: non_empty(query.search),
        }
    }
}

impl From<note::Model> for NoteResponse {
    fn from(model: note::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            category: model.category,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn note_service_from_state(state: &AppState) -> NoteService {
    ServiceContext::from_state(state).note()
}
