// src/models/branch.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Filial já com o nome do cliente (o read-model das listagens)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Branch {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub client_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BranchPayload {
    #[validate(length(min = 1, message = "O nome da filial é obrigatório."))]
    pub name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}
