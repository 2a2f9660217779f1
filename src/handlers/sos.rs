// src/handlers/sos.rs

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::sos::{SosStatusPayload, is_valid_sos_status},
};

// GET /api/sos
pub async fn list_sos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let alerts = state.sos_repo.list().await?;
    Ok(Json(alerts))
}

// PATCH /api/sos/{id}/status
pub async fn update_sos_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SosStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_sos_status(&payload.status) {
        return Err(AppError::BadRequest("Status de SOS inválido.".into()));
    }

    let alert = state
        .sos_repo
        .update_status(id, &payload.status, payload.comment.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound("Alerta SOS não encontrado.".into()))?;
    Ok(Json(alert))
}
