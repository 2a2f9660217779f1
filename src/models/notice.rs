// src/models/notice.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Aviso já com o nome do autor (LEFT JOIN em staff; autor é opcional)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_by: Option<i64>,
    pub created_by_name: Option<String>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NoticePayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub title: String,
    #[validate(length(min = 1, message = "O conteúdo é obrigatório."))]
    pub content: String,
}

// PATCH /api/notices/{id}/status (1 = visível, 0 = oculto)
#[derive(Debug, Deserialize, ToSchema)]
pub struct NoticeStatusPayload {
    pub status: i16,
}
