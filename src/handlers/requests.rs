// src/handlers/requests.rs
//
// O ciclo de vida de corridas. As rotas /api/runs são alias destas; o
// read-model camelCase sai em todas as respostas.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::request::{
        CreateRequestPayload, DateSummary, RequestListQuery, RequestResponse, SummaryQuery,
        UpdateRequestPayload, UpdateRequestStatusPayload,
    },
};

// GET /api/requests?date&status&myStatus
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = "Corridas",
    params(
        ("date" = Option<String>, Query, description = "Filtra pela data de coleta (YYYY-MM-DD)"),
        ("status" = Option<String>, Query, description = "Filtra pelo status"),
        ("myStatus" = Option<i32>, Query, description = "Filtra pelo status operacional")
    ),
    responses((status = 200, description = "Corridas em ordem de coleta", body = Vec<RequestResponse>)),
    security(("api_jwt" = []))
)]
pub async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<RequestListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = state.request_service.list(&query).await?;
    Ok(Json(requests))
}

// GET /api/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let request = state.request_service.fetch_found(id).await?;
    Ok(Json(request))
}

// POST /api/requests
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = "Corridas",
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "Corrida criada", body = RequestResponse),
        (status = 400, description = "Referência inválida (tipo, usuário ou filial)")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let request = state.request_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// PATCH e PUT /api/requests/{id}: o mesmo patch parcial serve aos dois —
// um corpo completo é apenas um patch com todos os campos presentes.
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    let request = state.request_service.patch(id, &payload).await?;
    Ok(Json(request))
}

// PATCH /api/requests/{id}/status
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRequestStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    let request = state.request_service.update_status(id, &payload).await?;
    Ok(Json(request))
}

// DELETE /api/requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.request_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/runs/summaries?year&month&clientId&branchId
#[utoipa::path(
    get,
    path = "/api/runs/summaries",
    tag = "Corridas",
    params(
        ("year" = Option<i32>, Query, description = "Ano da coleta"),
        ("month" = Option<i32>, Query, description = "Mês da coleta"),
        ("clientId" = Option<i64>, Query, description = "Filtra pelo cliente da filial"),
        ("branchId" = Option<i64>, Query, description = "Filtra pela filial")
    ),
    responses((status = 200, description = "Agregados diários de corridas faturáveis", body = Vec<DateSummary>)),
    security(("api_jwt" = []))
)]
pub async fn run_summaries(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let summaries = state.request_service.summaries(&query).await?;
    Ok(Json(summaries))
}
