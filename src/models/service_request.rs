// src/models/service_request.rs
//
// A variante agendada pelo próprio cliente (portal). Diferente das corridas
// do despacho, o preço aqui é OBRIGATORIAMENTE o do acordo de preço vigente
// no momento da criação; o valor fica congelado na linha.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct ServiceRequest {
    pub id: i64,
    pub client_id: i64,
    pub branch_id: i64,
    pub service_type_id: i64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub price: Decimal,
    pub status: String,
    pub branch_name: Option<String>,
    pub service_type_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ServiceRequestPayload {
    pub branch_id: i64,
    pub service_type_id: i64,
    #[validate(length(min = 1, message = "O local de coleta é obrigatório."))]
    pub pickup_location: String,
    #[validate(length(min = 1, message = "O local de entrega é obrigatório."))]
    pub dropoff_location: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
}
