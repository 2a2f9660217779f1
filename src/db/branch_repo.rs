// src/db/branch_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::branch::{Branch, BranchPayload},
};

// Todas as consultas juntam o nome do cliente, para que o read-model de
// filial saia completo de qualquer caminho de leitura.
const BRANCH_SELECT: &str = "SELECT b.*, c.name AS client_name
     FROM branches b
     LEFT JOIN clients c ON b.client_id = c.id";

#[derive(Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Visão administrativa: todas as filiais, ordem alfabética
    pub async fn list_all(&self) -> Result<Vec<Branch>, AppError> {
        let branches =
            sqlx::query_as::<_, Branch>(&format!("{BRANCH_SELECT} ORDER BY b.name"))
                .fetch_all(&self.pool)
                .await?;
        Ok(branches)
    }

    pub async fn list_by_client(&self, client_id: i64) -> Result<Vec<Branch>, AppError> {
        let branches = sqlx::query_as::<_, Branch>(&format!(
            "{BRANCH_SELECT} WHERE b.client_id = $1 ORDER BY b.name"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(branches)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Branch>, AppError> {
        let branch = sqlx::query_as::<_, Branch>(&format!("{BRANCH_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(branch)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM branches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    // Checagem de vínculo filial -> cliente usada pelos fluxos aninhados
    pub async fn belongs_to_client(&self, id: i64, client_id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM branches WHERE id = $1 AND client_id = $2",
        )
        .bind(id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }

    pub async fn create(
        &self,
        client_id: i64,
        payload: &BranchPayload,
    ) -> Result<Branch, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO branches (client_id, name, address, contact_person, contact_number, email)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(client_id)
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.contact_person)
        .bind(&payload.contact_number)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;

        self.find(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Filial recém-criada ({}) não pôde ser relida.",
                id
            ))
        })
    }

    // Update escopado ao cliente da rota; id de outra carteira é not-found
    pub async fn update(
        &self,
        id: i64,
        client_id: i64,
        payload: &BranchPayload,
    ) -> Result<Option<Branch>, AppError> {
        let result = sqlx::query(
            "UPDATE branches
             SET name = $1, address = $2, contact_person = $3, contact_number = $4,
                 email = $5, updated_at = now()
             WHERE id = $6 AND client_id = $7",
        )
        .bind(&payload.name)
        .bind(&payload.address)
        .bind(&payload.contact_person)
        .bind(&payload.contact_number)
        .bind(&payload.email)
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
        let result = sqlx::query("DELETE FROM branches WHERE id = $1 AND client_id = $2")
            .bind(id)
            .bind(client_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
