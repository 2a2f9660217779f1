// src/handlers/upload.rs

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{common::error::AppError, config::AppState};

// POST /api/upload — um arquivo por requisição, campo "file".
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart inválido: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // O nome original precisa ser copiado antes de consumir o campo.
        let original_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Falha ao ler o arquivo: {e}")))?;

        let stored = state
            .upload_service
            .store(original_name.as_deref(), &bytes)
            .await?;
        return Ok((StatusCode::CREATED, Json(stored)));
    }

    Err(AppError::BadRequest("Nenhum arquivo enviado.".into()))
}
