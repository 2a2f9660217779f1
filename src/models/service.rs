// src/models/service.rs
//
// Tipos de serviço (tabela de consulta) e os acordos de preço por cliente.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ServiceType {
    pub id: i64,
    pub name: String,
}

// Acordo de preço por (cliente, tipo de serviço). O par é único; a checagem
// é uma pré-consulta explícita, não uma constraint do banco.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ServiceCharge {
    pub id: i64,
    pub client_id: i64,
    pub service_type_id: i64,
    pub price: Decimal,
    pub service_type_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceChargePayload {
    pub service_type_id: i64,
    pub price: Decimal,
}
