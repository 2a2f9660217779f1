// src/handlers/service_types.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/service-types
pub async fn list_service_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = state.service_repo.list_types().await?;
    Ok(Json(types))
}

// GET /api/service-types/{id}
pub async fn get_service_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service_type = state
        .service_repo
        .find_type(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tipo de serviço não encontrado.".into()))?;
    Ok(Json(service_type))
}
