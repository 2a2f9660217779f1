// src/models/staff.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub photo_url: Option<String>,
    pub empl_no: Option<String>,
    pub id_no: Option<String>,
    pub role: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StaffPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    pub photo_url: Option<String>,
    pub empl_no: Option<String>,
    pub id_no: Option<String>,
    #[validate(length(min = 1, message = "O cargo é obrigatório."))]
    pub role: String,
}

// PUT /api/staff/{id}/status (ativa/desativa)
#[derive(Debug, Deserialize, ToSchema)]
pub struct StaffStatusPayload {
    pub status: i16,
}

// Tabela de consulta estática (GET /api/roles)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
