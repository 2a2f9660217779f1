// src/handlers/teams.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::team::{CreateTeamPayload, ListTeamsQuery, TeamWithMembers},
};

// POST /api/teams
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = "Equipes",
    request_body = CreateTeamPayload,
    responses(
        (status = 201, description = "Equipe criada com membros", body = TeamWithMembers),
        (status = 400, description = "Nome ou lista de membros ausente")
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Os campos são Option de propósito: ausência é um 400 com mensagem.
    // Lista vazia passa; a equipe nasce sem membros e sem comandante.
    let (name, members) = payload.validated().map_err(AppError::BadRequest)?;

    let team = state.team_service.create_team(name, members).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

// GET /api/teams?today=true
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = "Equipes",
    params(("today" = Option<bool>, Query, description = "Só equipes criadas hoje")),
    responses((status = 200, description = "Equipes com membros aninhados", body = Vec<TeamWithMembers>))
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<ListTeamsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teams = state
        .team_service
        .list_teams(query.today.unwrap_or(false))
        .await?;
    Ok(Json(teams))
}
