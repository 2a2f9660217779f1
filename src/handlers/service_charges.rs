// src/handlers/service_charges.rs
//
// Acordos de preço por (cliente, tipo de serviço). A dupla é única, checada
// por pré-consulta; a resposta do conflito carrega o acordo já existente.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::service::ServiceChargePayload,
};

// GET /api/clients/{client_id}/service-charges
pub async fn list_service_charges(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    let charges = state.service_repo.list_charges(client_id).await?;
    Ok(Json(charges))
}

// POST /api/clients/{client_id}/service-charges
pub async fn create_service_charge(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<ServiceChargePayload>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    if state
        .service_repo
        .find_type(payload.service_type_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Tipo de serviço não encontrado.".into()));
    }

    if let Some(existing) = state
        .service_repo
        .find_charge_by_pair(client_id, payload.service_type_id)
        .await?
    {
        return Err(AppError::Conflict {
            message: "Já existe um acordo de preço para este cliente e tipo de serviço.".into(),
            existing: Some(json!(existing)),
        });
    }

    let charge = state
        .service_repo
        .create_charge(client_id, payload.service_type_id, payload.price)
        .await?;
    Ok((StatusCode::CREATED, Json(charge)))
}

// PUT /api/clients/{client_id}/service-charges/{id}
pub async fn update_service_charge(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
    Json(payload): Json<ServiceChargePayload>,
) -> Result<impl IntoResponse, AppError> {
    if state
        .service_repo
        .find_type(payload.service_type_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Tipo de serviço não encontrado.".into()));
    }

    // Trocar o tipo não pode colidir com outro acordo do mesmo cliente.
    if let Some(existing) = state
        .service_repo
        .find_charge_by_pair(client_id, payload.service_type_id)
        .await?
    {
        if existing.id != id {
            return Err(AppError::Conflict {
                message: "Já existe um acordo de preço para este cliente e tipo de serviço."
                    .into(),
                existing: Some(json!(existing)),
            });
        }
    }

    let charge = state
        .service_repo
        .update_charge(id, client_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Acordo de preço não encontrado.".into()))?;
    Ok(Json(charge))
}

// DELETE /api/clients/{client_id}/service-charges/{id}
pub async fn delete_service_charge(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.service_repo.delete_charge(id, client_id).await? {
        return Err(AppError::NotFound("Acordo de preço não encontrado.".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
