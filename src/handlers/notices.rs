// src/handlers/notices.rs
//
// Mural de avisos. A criação aceita identidade opcional: com token válido o
// aviso registra o autor, sem token ele sai anônimo.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    middleware::auth::MaybeUser,
    models::notice::{NoticePayload, NoticeStatusPayload},
};

// GET /api/notices
pub async fn list_notices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let notices = state.notice_repo.list().await?;
    Ok(Json(notices))
}

// GET /api/notices/{id}
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let notice = state
        .notice_repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Aviso não encontrado.".into()))?;
    Ok(Json(notice))
}

// POST /api/notices
pub async fn create_notice(
    State(state): State<AppState>,
    MaybeUser(claims): MaybeUser,
    Json(payload): Json<NoticePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let created_by = claims.map(|claims| claims.sub);
    let notice = state.notice_repo.create(&payload, created_by).await?;
    Ok((StatusCode::CREATED, Json(notice)))
}

// PUT /api/notices/{id}
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NoticePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let notice = state
        .notice_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Aviso não encontrado.".into()))?;
    Ok(Json(notice))
}

// PATCH /api/notices/{id}/status
pub async fn update_notice_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NoticeStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let notice = state
        .notice_repo
        .update_status(id, payload.status)
        .await?
        .ok_or_else(|| AppError::NotFound("Aviso não encontrado.".into()))?;
    Ok(Json(notice))
}

// DELETE /api/notices/{id}
pub async fn delete_notice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.notice_repo.delete(id).await? {
        return Err(AppError::NotFound("Aviso não encontrado.".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
