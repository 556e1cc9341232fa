//! Shoe CRUD handlers.
//!
//! Every response wraps the record in the `{ok: true, ...}` envelope. The
//! only error is a 404 with a `{error: message}` body; the lookup message
//! differs from the mutation message.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use zapatos_core::{ShoeId, ShoePayload, ShoeRecord};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// 404 message for lookups.
const SHOE_NOT_FOUND: &str = "Zapato no encontrado";
/// 404 message for mutations.
const ITEM_NOT_FOUND: &str = "Item no encontrado";

/// Response envelope for a single record.
#[derive(Debug, Serialize)]
pub struct ShoeResponse {
    pub ok: bool,
    pub data: ShoeRecord,
}

/// Response envelope for the full collection.
#[derive(Debug, Serialize)]
pub struct ShoeListResponse {
    pub ok: bool,
    pub data: Vec<ShoeRecord>,
}

/// Response envelope for a deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
    pub deleted: ShoeRecord,
}

/// Parse a path segment into a shoe id.
///
/// Non-numeric input matches no record, so callers turn `None` into the
/// same 404 as a missing id rather than a 400.
fn parse_id(raw: &str) -> Option<ShoeId> {
    raw.parse::<i64>().ok().map(ShoeId::new)
}

fn not_found(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Create a shoe.
///
/// Always succeeds; malformed fields in the body silently fall back to
/// their defaults, and a request without a JSON body counts as `{}`.
pub async fn create(
    State(state): State<AppState>,
    payload: Option<Json<ShoePayload>>,
) -> (StatusCode, Json<ShoeResponse>) {
    let payload = payload.map_or_else(ShoePayload::default, |Json(payload)| payload);
    let record = state.registry().write().await.create(payload);
    tracing::info!(id = %record.id, "shoe created");

    (
        StatusCode::CREATED,
        Json(ShoeResponse {
            ok: true,
            data: record,
        }),
    )
}

/// Fetch one shoe by id.
///
/// # Errors
///
/// Returns 404 if no record has that id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShoeResponse>> {
    let shoe_id = parse_id(&id).ok_or_else(|| not_found(SHOE_NOT_FOUND))?;
    let registry = state.registry().read().await;
    let record = registry
        .get(shoe_id)
        .map_err(|_| not_found(SHOE_NOT_FOUND))?;

    Ok(Json(ShoeResponse {
        ok: true,
        data: record.clone(),
    }))
}

/// List all shoes in insertion order.
pub async fn index(State(state): State<AppState>) -> Json<ShoeListResponse> {
    let registry = state.registry().read().await;

    Json(ShoeListResponse {
        ok: true,
        data: registry.list().to_vec(),
    })
}

/// Update a shoe in place.
///
/// A request without a JSON body counts as `{}`, leaving every field
/// untouched.
///
/// # Errors
///
/// Returns 404 if no record has that id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<ShoePayload>>,
) -> Result<Json<ShoeResponse>> {
    let payload = payload.map_or_else(ShoePayload::default, |Json(payload)| payload);
    let shoe_id = parse_id(&id).ok_or_else(|| not_found(ITEM_NOT_FOUND))?;
    let mut registry = state.registry().write().await;
    let record = registry
        .update(shoe_id, payload)
        .map_err(|_| not_found(ITEM_NOT_FOUND))?
        .clone();
    tracing::info!(id = %record.id, "shoe updated");

    Ok(Json(ShoeResponse {
        ok: true,
        data: record,
    }))
}

/// Delete a shoe and return the removed record.
///
/// # Errors
///
/// Returns 404 if no record has that id.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>> {
    let shoe_id = parse_id(&id).ok_or_else(|| not_found(ITEM_NOT_FOUND))?;
    let mut registry = state.registry().write().await;
    let record = registry
        .remove(shoe_id)
        .map_err(|_| not_found(ITEM_NOT_FOUND))?;
    tracing::info!(id = %record.id, "shoe deleted");

    Ok(Json(DeletedResponse {
        ok: true,
        deleted: record,
    }))
}
