// src/common/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// A taxonomia é fixa: validação/conflito -> 400, não encontrado -> 404,
// credenciais/token -> 401, resto -> 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Entrada malformada ou referência inválida apontada pelo próprio código
    // (ex: "Invalid branch" na criação de uma corrida). Nunca inferido de
    // códigos de erro do banco.
    #[error("{0}")]
    BadRequest(String),

    // Violação de unicidade detectada por pré-consulta. Quando temos o
    // registro conflitante em mãos, ele vai junto no corpo da resposta.
    #[error("{message}")]
    Conflict {
        message: String,
        existing: Option<Value>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// Fora de produção a resposta 500 carrega a mensagem interna, igual ao
// comportamento NODE_ENV=development do servidor antigo.
fn is_production() -> bool {
    std::env::var("APP_ENV").map(|v| v == "production").unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }

            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }

            AppError::Conflict { message, existing } => {
                let body = match existing {
                    Some(existing) => json!({ "message": message, "existing": existing }),
                    None => json!({ "message": message }),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }

            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }

            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Usuário ou senha inválidos." })),
            )
                .into_response(),

            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Token de autenticação inválido ou ausente." })),
            )
                .into_response(),

            // Todos os outros (DatabaseError, InternalServerError, ...) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro interno do servidor: {}", e);
                let body = if is_production() {
                    json!({ "message": "Ocorreu um erro inesperado." })
                } else {
                    json!({ "message": "Ocorreu um erro inesperado.", "error": e.to_string() })
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflito_vira_400() {
        let err = AppError::Conflict {
            message: "Account number already exists".into(),
            existing: None,
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn nao_encontrado_vira_404() {
        let response = AppError::NotFound("Client not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn credenciais_invalidas_viram_401() {
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
