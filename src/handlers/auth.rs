// src/handlers/auth.rs

use axum::{extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    common::{error::AppError, json::Json},
    config::AppState,
    models::auth::{AuthResponse, LoginPayload, UserPublic},
};

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login bem-sucedido", body = AuthResponse),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (token, user) = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        token,
        user: UserPublic::from(&user),
    }))
}
