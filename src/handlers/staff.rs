// src/handlers/staff.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::staff::{StaffPayload, StaffStatusPayload},
};

// GET /api/staff
pub async fn list_staff(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff_repo.list().await?;
    Ok(Json(staff))
}

// GET /api/staff/{id}
pub async fn get_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let member = state
        .staff_repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Funcionário não encontrado.".into()))?;
    Ok(Json(member))
}

// POST /api/staff
pub async fn create_staff(
    State(state): State<AppState>,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let member = state.staff_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// PUT /api/staff/{id}
pub async fn update_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let member = state
        .staff_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Funcionário não encontrado.".into()))?;
    Ok(Json(member))
}

// PUT /api/staff/{id}/status — liga/desliga o funcionário sem tocar no resto.
pub async fn update_staff_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StaffStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let member = state
        .staff_repo
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Funcionário não encontrado.".into()))?;
    Ok(Json(member))
}

// DELETE /api/staff/{id}
pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.staff_repo.delete(id).await? {
        return Err(AppError::NotFound("Funcionário não encontrado.".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/roles — lookup semeado, só leitura.
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = state.staff_repo.list_roles().await?;
    Ok(Json(roles))
}
