//! Handlers for the `/contacts` resource.
//!
//! Each handler forwards the raw JSON payload to the contact model and
//! shapes its outcome: `{"data": ...}` on success, `{"errors": [...]}`
//! with a 400 when validation fails, 404 for malformed or unknown ids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

/// GET /contacts — all contacts, newest first.
async fn list_contacts(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let store = state.store.lock().await;
    let contacts = store.model().find_all()?;
    Ok(Json(json!({ "data": contacts })))
}

/// POST /contacts — register a contact from an arbitrary JSON payload.
async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Response> {
    let store = state.store.lock().await;
    let outcome = store.model().register(&payload)?;
    if !outcome.errors.is_empty() {
        return Ok(validation_failure(outcome.errors));
    }
    Ok((StatusCode::CREATED, Json(json!({ "data": outcome.record }))).into_response())
}

/// GET /contacts/{id}
async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let store = state.store.lock().await;
    let contact = store.model().find_by_id(&id)?.ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "data": contact })))
}

/// PUT /contacts/{id} — replace the record's fields in place.
async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<Response> {
    let store = state.store.lock().await;
    let outcome = store.model().edit(&id, &payload)?;
    if !outcome.errors.is_empty() {
        return Ok(validation_failure(outcome.errors));
    }
    let contact = outcome.record.ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "data": contact })).into_response())
}

/// DELETE /contacts/{id} — returns the deleted record.
async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let store = state.store.lock().await;
    let contact = store.model().delete_by_id(&id)?.ok_or(AppError::NotFound)?;
    Ok(Json(json!({ "data": contact })))
}

fn validation_failure(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}
