// src/db/staff_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::staff::{Role, Staff, StaffPayload},
};

// Par (id, cargo) usado pela derivação de comandante de equipe
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StaffRole {
    pub id: i64,
    pub role: String,
}

#[derive(Clone)]
pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Staff>, AppError> {
        let staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(staff)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Staff>, AppError> {
        let staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(staff)
    }

    // Resolve os cargos de um lote de membros em UMA consulta. A ordem de
    // retorno do banco é irrelevante: quem decide a precedência é a ordem
    // da lista enviada (ver TeamService).
    pub async fn find_roles(&self, ids: &[i64]) -> Result<Vec<StaffRole>, AppError> {
        let roles =
            sqlx::query_as::<_, StaffRole>("SELECT id, role FROM staff WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;
        Ok(roles)
    }

    pub async fn create(&self, payload: &StaffPayload) -> Result<Staff, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO staff (name, photo_url, empl_no, id_no, role)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&payload.name)
        .bind(&payload.photo_url)
        .bind(&payload.empl_no)
        .bind(&payload.id_no)
        .bind(&payload.role)
        .fetch_one(&self.pool)
        .await?;

        self.find(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Funcionário recém-criado ({}) não pôde ser relido.",
                id
            ))
        })
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &StaffPayload,
    ) -> Result<Option<Staff>, AppError> {
        let result = sqlx::query(
            "UPDATE staff
             SET name = $1, photo_url = $2, empl_no = $3, id_no = $4, role = $5,
                 updated_at = now()
             WHERE id = $6",
        )
        .bind(&payload.name)
        .bind(&payload.photo_url)
        .bind(&payload.empl_no)
        .bind(&payload.id_no)
        .bind(&payload.role)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    pub async fn update_status(&self, id: i64, status: i16) -> Result<Option<Staff>, AppError> {
        let result = sqlx::query("UPDATE staff SET status = $1, updated_at = now() WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Tabela de consulta estática
    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles = sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }
}
