// src/handlers/clients.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::client::{Client, ClientPayload},
};

// GET /api/clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clientes",
    responses((status = 200, description = "Lista de clientes", body = Vec<Client>))
)]
pub async fn list_clients(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clients = state.client_repo.list().await?;
    Ok(Json(clients))
}

// GET /api/clients/{id}
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Client),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let client = state
        .client_repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".into()))?;
    Ok(Json(client))
}

// POST /api/clients
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clientes",
    request_body = ClientPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Client),
        (status = 400, description = "Dados inválidos ou número de conta duplicado")
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Unicidade do número de conta por pré-consulta; o registro conflitante
    // vai junto na resposta.
    if let Some(existing) = state
        .client_repo
        .find_by_account_number(&payload.account_number, None)
        .await?
    {
        return Err(AppError::Conflict {
            message: "Número de conta já cadastrado.".into(),
            existing: Some(json!(existing)),
        });
    }

    let client = state.client_repo.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

// PUT /api/clients/{id}
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Client),
        (status = 400, description = "Dados inválidos ou número de conta duplicado"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // O próprio registro não conta como duplicata.
    if let Some(existing) = state
        .client_repo
        .find_by_account_number(&payload.account_number, Some(id))
        .await?
    {
        return Err(AppError::Conflict {
            message: "Número de conta já cadastrado.".into(),
            existing: Some(json!(existing)),
        });
    }

    let client = state
        .client_repo
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Cliente não encontrado.".into()))?;
    Ok(Json(client))
}

// DELETE /api/clients/{id}
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.client_repo.delete(id).await? {
        return Err(AppError::NotFound("Cliente não encontrado.".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
