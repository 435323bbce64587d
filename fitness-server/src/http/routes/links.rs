//! Exercise-muscle link endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::parse_id;
use crate::http::server::AppState;
use crate::models::EntityKind;

fn parse_pair(exercise_id: &str, muscle_id: &str) -> Result<(i32, i32), ApiError> {
    Ok((
        parse_id(EntityKind::Exercise, exercise_id)?,
        parse_id(EntityKind::Muscle, muscle_id)?,
    ))
}

/// POST /v1/exercises/{id}/muscles/{muscle_id} - link (idempotent)
async fn link(
    State(state): State<Arc<AppState>>,
    Path((exercise_id, muscle_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let (exercise_id, muscle_id) = parse_pair(&exercise_id, &muscle_id)?;
    state.db.links().link(exercise_id, muscle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/exercises/{id}/muscles/{muscle_id} - unlink
async fn unlink(
    State(state): State<Arc<AppState>>,
    Path((exercise_id, muscle_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let (exercise_id, muscle_id) = parse_pair(&exercise_id, &muscle_id)?;
    state.db.links().unlink(exercise_id, muscle_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Link routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/v1/exercises/{id}/muscles/{muscle_id}",
        post(link).delete(unlink),
    )
}
