// src/handlers/service_requests.rs
//
// Solicitações de serviço do cliente. O preço é congelado do acordo vigente
// no momento da gravação; sem acordo para o par (cliente, tipo), é 400.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::service_request::ServiceRequestPayload,
};

// GET /api/clients/{client_id}/service-requests
pub async fn list_service_requests(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    let requests = state.service_request_repo.list_by_client(client_id).await?;
    Ok(Json(requests))
}

// GET /api/clients/{client_id}/service-requests/{id}
pub async fn get_service_request(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let request = state
        .service_request_repo
        .find(id)
        .await?
        .filter(|request| request.client_id == client_id)
        .ok_or_else(|| AppError::NotFound("Solicitação de serviço não encontrada.".into()))?;
    Ok(Json(request))
}

// POST /api/clients/{client_id}/service-requests
pub async fn create_service_request(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    Json(payload): Json<ServiceRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !state.client_repo.exists(client_id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    if !state
        .branch_repo
        .belongs_to_client(payload.branch_id, client_id)
        .await?
    {
        return Err(AppError::BadRequest(
            "Filial inválida para este cliente.".into(),
        ));
    }

    let charge = state
        .service_repo
        .find_charge_by_pair(client_id, payload.service_type_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(
                "Não há acordo de preço para este cliente e tipo de serviço.".into(),
            )
        })?;

    let request = state
        .service_request_repo
        .create(client_id, &payload, charge.price)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// PUT /api/clients/{client_id}/service-requests/{id}
pub async fn update_service_request(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
    Json(payload): Json<ServiceRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !state
        .branch_repo
        .belongs_to_client(payload.branch_id, client_id)
        .await?
    {
        return Err(AppError::BadRequest(
            "Filial inválida para este cliente.".into(),
        ));
    }

    // O preço acompanha o acordo vigente do tipo gravado, não o antigo.
    let charge = state
        .service_repo
        .find_charge_by_pair(client_id, payload.service_type_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(
                "Não há acordo de preço para este cliente e tipo de serviço.".into(),
            )
        })?;

    let request = state
        .service_request_repo
        .update(id, client_id, &payload, charge.price)
        .await?
        .ok_or_else(|| AppError::NotFound("Solicitação de serviço não encontrada.".into()))?;
    Ok(Json(request))
}

// DELETE /api/clients/{client_id}/service-requests/{id}
pub async fn delete_service_request(
    State(state): State<AppState>,
    Path((client_id, id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    if !state.service_request_repo.delete(id, client_id).await? {
        return Err(AppError::NotFound(
            "Solicitação de serviço não encontrada.".into(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}
