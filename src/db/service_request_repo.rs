// src/db/service_request_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::service_request::{ServiceRequest, ServiceRequestPayload},
};

const SR_SELECT: &str = "SELECT sr.*, b.name AS branch_name, st.name AS service_type_name
     FROM service_requests sr
     JOIN branches b ON sr.branch_id = b.id
     JOIN service_types st ON sr.service_type_id = st.id";

#[derive(Clone)]
pub struct ServiceRequestRepository {
    pool: PgPool,
}

impl ServiceRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_client(&self, client_id: i64) -> Result<Vec<ServiceRequest>, AppError> {
        let requests = sqlx::query_as::<_, ServiceRequest>(&format!(
            "{SR_SELECT} WHERE sr.client_id = $1
             ORDER BY sr.pickup_date DESC, sr.pickup_time DESC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn find(&self, id: i64) -> Result<Option<ServiceRequest>, AppError> {
        let request =
            sqlx::query_as::<_, ServiceRequest>(&format!("{SR_SELECT} WHERE sr.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(request)
    }

    // `price` vem congelado do acordo de preço vigente; o status nasce
    // 'pending' por default do banco.
    pub async fn create(
        &self,
        client_id: i64,
        payload: &ServiceRequestPayload,
        price: Decimal,
    ) -> Result<ServiceRequest, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO service_requests (
                client_id, branch_id, service_type_id,
                pickup_location, dropoff_location, pickup_date, pickup_time, price
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(client_id)
        .bind(payload.branch_id)
        .bind(payload.service_type_id)
        .bind(&payload.pickup_location)
        .bind(&payload.dropoff_location)
        .bind(payload.pickup_date)
        .bind(payload.pickup_time)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        self.find(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Solicitação recém-criada ({}) não pôde ser relida.",
                id
            ))
        })
    }

    pub async fn update(
        &self,
        id: i64,
        client_id: i64,
        payload: &ServiceRequestPayload,
        price: Decimal,
    ) -> Result<Option<ServiceRequest>, AppError> {
        let result = sqlx::query(
            "UPDATE service_requests
             SET branch_id = $1, service_type_id = $2, pickup_location = $3,
                 dropoff_location = $4, pickup_date = $5, pickup_time = $6,
                 price = $7, updated_at = now()
             WHERE id = $8 AND client_id = $9",
        )
        .bind(payload.branch_id)
        .bind(payload.service_type_id)
        .bind(&payload.pickup_location)
        .bind(&payload.dropoff_location)
        .bind(payload.pickup_date)
        .bind(payload.pickup_time)
        .bind(price)
        .bind(id)
        .bind(client_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    pub async fn delete(&self, id: i64, client_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM service_requests WHERE id = $1 AND client_id = $2")
            .bind(id)
            .bind(client_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
