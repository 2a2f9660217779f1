// src/models/request.rs
//
// A entidade de ciclo de vida unificada: o servidor antigo tinha "requests" e
// "runs" como dois controllers sobre a MESMA tabela, então aqui existe um só
// modelo e as rotas /api/runs são alias das de /api/requests.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// A linha como sai do banco, já com os nomes juntados de filial e tipo de
// serviço (LEFT JOIN, podem faltar).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RequestRow {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub service_type_id: i64,
    pub branch_id: i64,
    pub pickup_location: String,
    pub delivery_location: String,
    pub pickup_date: DateTime<Utc>,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub my_status: i32,
    pub price: Option<Decimal>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub team_id: Option<i64>,
    pub staff_id: Option<i64>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub branch_name: Option<String>,
    pub service_type_name: Option<String>,
}

// O read-model que o frontend consome: nomes de coluna viram camelCase,
// exceto `team_id`, que o frontend espera em snake_case mesmo. Campos fora
// desta lista (staff_id, end_time) não saem na resposta.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub service_type_id: i64,
    pub service_type_name: Option<String>,
    pub pickup_location: String,
    pub delivery_location: String,
    pub pickup_date: DateTime<Utc>,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub my_status: i32,
    pub branch_id: i64,
    pub branch_name: Option<String>,
    pub price: Option<Decimal>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "team_id")]
    pub team_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RequestRow> for RequestResponse {
    fn from(row: RequestRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            user_name: row.user_name,
            service_type_id: row.service_type_id,
            service_type_name: row.service_type_name,
            pickup_location: row.pickup_location,
            delivery_location: row.delivery_location,
            pickup_date: row.pickup_date,
            description: row.description,
            priority: row.priority,
            status: row.status,
            my_status: row.my_status,
            branch_id: row.branch_id,
            branch_name: row.branch_name,
            price: row.price,
            latitude: row.latitude,
            longitude: row.longitude,
            team_id: row.team_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    pub user_id: i64,
    #[validate(length(min = 1, message = "O nome do solicitante é obrigatório."))]
    pub user_name: String,
    pub service_type_id: i64,
    pub branch_id: i64,
    #[validate(length(min = 1, message = "O local de coleta é obrigatório."))]
    pub pickup_location: String,
    #[validate(length(min = 1, message = "O local de entrega é obrigatório."))]
    pub delivery_location: String,
    pub pickup_date: DateTime<Utc>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub my_status: Option<i32>,
    pub price: Decimal,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// Patch parcial: só o que vier preenchido é atualizado. `team_id` e
// `staff_id` chegam em snake_case do frontend, como sempre chegaram.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestPayload {
    pub user_name: Option<String>,
    pub service_type_id: Option<i64>,
    pub branch_id: Option<i64>,
    pub pickup_location: Option<String>,
    pub delivery_location: Option<String>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub my_status: Option<i32>,
    pub price: Option<Decimal>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "team_id")]
    pub team_id: Option<i64>,
    #[serde(rename = "staff_id")]
    pub staff_id: Option<i64>,
}

impl UpdateRequestPayload {
    // O patch vazio não deve gerar UPDATE nenhum.
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.service_type_id.is_none()
            && self.branch_id.is_none()
            && self.pickup_location.is_none()
            && self.delivery_location.is_none()
            && self.pickup_date.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.my_status.is_none()
            && self.price.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.team_id.is_none()
            && self.staff_id.is_none()
    }
}

// PATCH /{id}/status: caminho estreito, não interfere com o patch geral.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatusPayload {
    pub status: String,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListQuery {
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub my_status: Option<i32>,
}

// GET /api/runs/summaries?year&month&clientId&branchId
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub client_id: Option<i64>,
    pub branch_id: Option<i64>,
}

// Agregado diário de corridas faturáveis (my_status = 3), agrupado pela data
// de COLETA, não pela de criação.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateSummary {
    pub date: NaiveDate,
    pub total_runs: i64,
    pub total_runs_completed: i64,
    pub total_amount: Decimal,
    pub total_amount_completed: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> RequestRow {
        RequestRow {
            id: 7,
            user_id: 2,
            user_name: "despacho".into(),
            service_type_id: 1,
            branch_id: 4,
            pickup_location: "Cofre central".into(),
            delivery_location: "Agência Norte".into(),
            pickup_date: Utc.with_ymd_and_hms(2025, 3, 10, 8, 30, 0).unwrap(),
            description: None,
            priority: "medium".into(),
            status: "pending".into(),
            my_status: 0,
            price: Some(Decimal::new(50000, 2)),
            latitude: None,
            longitude: None,
            team_id: Some(3),
            staff_id: Some(9),
            end_time: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap(),
            branch_name: Some("Agência Norte".into()),
            service_type_name: Some("Cash Delivery".into()),
        }
    }

    #[test]
    fn read_model_usa_camel_case_exceto_team_id() {
        let response = RequestResponse::from(sample_row());
        let value = serde_json::to_value(&response).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("userId"));
        assert!(obj.contains_key("userName"));
        assert!(obj.contains_key("pickupDate"));
        assert!(obj.contains_key("myStatus"));
        assert!(obj.contains_key("branchName"));
        // A exceção histórica do frontend:
        assert!(obj.contains_key("team_id"));
        assert!(!obj.contains_key("teamId"));
    }

    #[test]
    fn read_model_descarta_campos_fora_da_lista() {
        let response = RequestResponse::from(sample_row());
        let value = serde_json::to_value(&response).unwrap();
        let obj = value.as_object().unwrap();

        assert!(!obj.contains_key("staff_id"));
        assert!(!obj.contains_key("staffId"));
        assert!(!obj.contains_key("end_time"));
        assert!(!obj.contains_key("endTime"));
    }

    #[test]
    fn patch_vazio_e_detectado() {
        assert!(UpdateRequestPayload::default().is_empty());
        let patch = UpdateRequestPayload {
            team_id: Some(1),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
