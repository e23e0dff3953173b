//! Simple record handlers: create, list, get, delete.
//!
//! The only component with policy: validates untrusted input, maps outcomes
//! to statuses, and orchestrates the store. Stateless across calls.

use crate::error::AppError;
use crate::model::SimpleInput;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Identifiers are positive integers; anything else is a client error before
/// the store is consulted.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    match id_str.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(format!("invalid id '{}'", id_str))),
    }
}

/// `POST /api/simple` — validate, insert, and return the created record.
pub async fn create(
    State(state): State<AppState>,
    input: SimpleInput,
) -> Result<impl IntoResponse, AppError> {
    let new = input.validate()?;
    let record = state.store.insert(&new).await?;
    tracing::info!(id = record.id, "created simple");
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /api/simple` — all live records in creation order; an empty list is
/// a success, never an error.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.store.find_all().await?;
    Ok((StatusCode::OK, Json(records)))
}

/// `GET /api/simple/:id` — one live record. An unknown identity reports the
/// same status class as a malformed one.
pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let record = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(record)))
}

/// `DELETE /api/simple/:id` — soft-delete one live record and return its
/// pre-deletion snapshot so callers know what was removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let snapshot = state
        .store
        .soft_delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    tracing::info!(id, "deleted simple");
    Ok((StatusCode::OK, Json(snapshot)))
}
