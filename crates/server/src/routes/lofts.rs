//! Loft CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::instrument;

use loftline_core::LoftId;

use crate::db;
use crate::error::AppError;
use crate::models::{CreateLoft, Loft, UpdateLoft};
use crate::state::AppState;

/// Build the lofts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/lofts", get(list_lofts).post(create_loft))
        .route(
            "/api/lofts/{id}",
            get(get_loft).put(update_loft).delete(delete_loft),
        )
}

/// List all lofts.
#[instrument(skip(state))]
async fn list_lofts(State(state): State<AppState>) -> Result<Json<Vec<Loft>>, AppError> {
    let lofts = db::lofts::list_lofts(state.pool()).await?;
    Ok(Json(lofts))
}

/// Fetch one loft.
#[instrument(skip(state))]
async fn get_loft(
    State(state): State<AppState>,
    Path(id): Path<LoftId>,
) -> Result<Json<Loft>, AppError> {
    let loft = db::lofts::get_loft(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("loft {id}")))?;
    Ok(Json(loft))
}

/// Create a loft.
#[instrument(skip(state, payload))]
async fn create_loft(
    State(state): State<AppState>,
    Json(payload): Json<CreateLoft>,
) -> Result<(StatusCode, Json<Loft>), AppError> {
    let loft = db::lofts::create_loft(state.pool(), payload).await?;
    Ok((StatusCode::CREATED, Json(loft)))
}

/// Update a loft.
#[instrument(skip(state, payload))]
async fn update_loft(
    State(state): State<AppState>,
    Path(id): Path<LoftId>,
    Json(payload): Json<UpdateLoft>,
) -> Result<Json<Loft>, AppError> {
    let loft = db::lofts::update_loft(state.pool(), id, payload).await?;
    Ok(Json(loft))
}

/// Delete a loft.
#[instrument(skip(state))]
async fn delete_loft(
    State(state): State<AppState>,
    Path(id): Path<LoftId>,
) -> Result<StatusCode, AppError> {
    db::lofts::delete_loft(state.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
