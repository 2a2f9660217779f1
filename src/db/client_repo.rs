// src/db/client_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::client::{Client, ClientPayload},
};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Clientes mais recentes primeiro
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients =
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(clients)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(client)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    // A unicidade do número de conta é verificada aqui, por pré-consulta.
    // `exclude_id` deixa o update ignorar o próprio registro.
    pub async fn find_by_account_number(
        &self,
        account_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<Client>, AppError> {
        let client = match exclude_id {
            Some(id) => {
                sqlx::query_as::<_, Client>(
                    "SELECT * FROM clients WHERE account_number = $1 AND id <> $2",
                )
                .bind(account_number)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE account_number = $1")
                    .bind(account_number)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };
        Ok(client)
    }

    // Insere e refaz a leitura pela id gerada: a resposta reflete o que o
    // banco realmente gravou (timestamps inclusive).
    pub async fn create(&self, payload: &ClientPayload) -> Result<Client, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO clients (name, account_number, email, phone, address)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&payload.name)
        .bind(&payload.account_number)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.address)
        .fetch_one(&self.pool)
        .await?;

        self.find(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Cliente recém-criado ({}) não pôde ser relido.",
                id
            ))
        })
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &ClientPayload,
    ) -> Result<Option<Client>, AppError> {
        let result = sqlx::query(
            "UPDATE clients
             SET name = $1, account_number = $2, email = $3, phone = $4, address = $5,
                 updated_at = now()
             WHERE id = $6",
        )
        .bind(&payload.name)
        .bind(&payload.account_number)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.address)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
