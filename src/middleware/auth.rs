use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::common::error::AppError;
use crate::config::AppState;
use crate::models::auth::Claims;

/// Extrai o token do header `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Middleware que exige um token JWT válido.
///
/// As claims verificadas ficam disponíveis nas extensions da requisição
/// para os handlers que precisarem da identidade.
pub async fn auth_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::InvalidToken)?;
    let claims = state.auth_service.verify_token(token)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Identidade opcional: resolve as claims quando a requisição traz um token
/// válido e segue como anônima caso contrário. Usado em rotas públicas que
/// registram o autor quando ele está autenticado.
pub struct MaybeUser(pub Option<Claims>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Rotas protegidas já carregam as claims nas extensions.
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(MaybeUser(Some(claims.clone())));
        }

        let claims = bearer_token(&parts.headers)
            .and_then(|token| state.auth_service.verify_token(token).ok());

        Ok(MaybeUser(claims))
    }
}
