// src/db/service_repo.rs
//
// Tipos de serviço e acordos de preço (service_charges).

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::service::{ServiceCharge, ServiceChargePayload, ServiceType},
};

const CHARGE_SELECT: &str = "SELECT sc.*, st.name AS service_type_name
     FROM service_charges sc
     JOIN service_types st ON sc.service_type_id = st.id";

#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_types(&self) -> Result<Vec<ServiceType>, AppError> {
        let types = sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(types)
    }

    pub async fn find_type(&self, id: i64) -> Result<Option<ServiceType>, AppError> {
        let service_type =
            sqlx::query_as::<_, ServiceType>("SELECT * FROM service_types WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(service_type)
    }

    pub async fn list_charges(&self, client_id: i64) -> Result<Vec<ServiceCharge>, AppError> {
        let charges = sqlx::query_as::<_, ServiceCharge>(&format!(
            "{CHARGE_SELECT} WHERE sc.client_id = $1 ORDER BY st.name"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(charges)
    }

    pub async fn find_charge(&self, id: i64) -> Result<Option<ServiceCharge>, AppError> {
        let charge =
            sqlx::query_as::<_, ServiceCharge>(&format!("{CHARGE_SELECT} WHERE sc.id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(charge)
    }

    // O acordo de um par (cliente, tipo): pré-checagem de duplicidade na
    // criação e fonte do preço congelado dos service requests.
    pub async fn find_charge_by_pair(
        &self,
        client_id: i64,
        service_type_id: i64,
    ) -> Result<Option<ServiceCharge>, AppError> {
        let charge = sqlx::query_as::<_, ServiceCharge>(&format!(
            "{CHARGE_SELECT} WHERE sc.client_id = $1 AND sc.service_type_id = $2"
        ))
        .bind(client_id)
        .bind(service_type_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(charge)
    }

    pub async fn create_charge(
        &self,
        client_id: i64,
        service_type_id: i64,
        price: Decimal,
    ) -> Result<ServiceCharge, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO service_charges (client_id, service_type_id, price)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(client_id)
        .bind(service_type_id)
        .bind(price)
        .fetch_one(&self.pool)
        .await?;

        self.find_charge(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Acordo de preço recém-criado ({}) não pôde ser relido.",
                id
            ))
        })
    }

    pub async fn update_charge(
        &self,
        id: i64,
        client_id: i64,
        payload: &ServiceChargePayload,
    ) -> Result<Option<ServiceCharge>, AppError> {
        let result = sqlx::query(
            "UPDATE service_charges
             SET service_type_id = $1, price = $2, updated_at = now()
             WHERE id = $3 AND client_id = $4",
        )
        .bind(payload.service_type_id)
        .bind(payload.price)
        .bind(id)
        .bind(client_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_charge(id).await
    }

    pub async fn delete_charge(&self, id: i64, client_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM service_charges WHERE id = $1 AND client_id = $2")
            .bind(id)
            .bind(client_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
