// src/handlers/branches.rs
//
// Filiais vivem aninhadas no cliente (/api/clients/{client_id}/branches);
// a listagem plana /api/branches existe para telas que cruzam clientes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::branch::BranchPayload,
};

// GET /api/branches
pub async fn list_all_branches(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let branches = state.branch_repo.list_all().await?;
    Ok(Json(branches))
}

// GET /api/clients/{client_id}/branches
pub async fn list_branches(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    let branches = state.branch_repo.list_by_client(client_id).await?;
    Ok(Json(branches))
}

// GET /api/clients/{client_id}/branches/{id}
pub async fn get_branch(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state
        .branch_repo
        .find(id)
        .await?
        .filter(|branch| branch.client_id == client_id)
        .ok_or_else(|| AppError::NotFound("Filial não encontrada.".into()))?;
    Ok(Json(branch))
}

// POST /api/clients/{client_id}/branches
pub async fn create_branch(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<BranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }

    let branch = state.branch_repo.create(client_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(branch)))
}

// PUT /api/clients/{client_id}/branches/{id}
pub async fn update_branch(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
    Json(payload): Json<BranchPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let branch = state
        .branch_repo
        .update(id, client_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Filial não encontrada.".into()))?;
    Ok(Json(branch))
}

// DELETE /api/clients/{client_id}/branches/{id}
pub async fn delete_branch(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.branch_repo.delete(id, client_id).await? {
        return Err(AppError::NotFound("Filial não encontrada.".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
