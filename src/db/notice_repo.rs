// src/db/notice_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::notice::{Notice, NoticePayload},
};

const NOTICE_SELECT: &str = "SELECT n.*, s.name AS created_by_name
     FROM notices n
     LEFT JOIN staff s ON n.created_by = s.id";

#[derive(Clone)]
pub struct NoticeRepository {
    pool: PgPool,
}

impl NoticeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Notice>, AppError> {
        let notices =
            sqlx::query_as::<_, Notice>(&format!("{NOTICE_SELECT} ORDER BY n.created_at DESC"))
                .fetch_all(&self.pool)
                .await?;
        Ok(notices)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Notice>, AppError> {
        let notice = sqlx::query_as::<_, Notice>(&format!("{NOTICE_SELECT} WHERE n.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(notice)
    }

    // `created_by` é a identidade autenticada quando houver; aviso anônimo é
    // permitido.
    pub async fn create(
        &self,
        payload: &NoticePayload,
        created_by: Option<i64>,
    ) -> Result<Notice, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO notices (title, content, created_by) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&payload.title)
        .bind(&payload.content)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        self.find(id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Aviso recém-criado ({}) não pôde ser relido.",
                id
            ))
        })
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &NoticePayload,
    ) -> Result<Option<Notice>, AppError> {
        let result =
            sqlx::query("UPDATE notices SET title = $1, content = $2, updated_at = now() WHERE id = $3")
                .bind(&payload.title)
                .bind(&payload.content)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }

    pub async fn update_status(&self, id: i64, status: i16) -> Result<Option<Notice>, AppError> {
        let result = sqlx::query("UPDATE notices SET status = $1, updated_at = now() WHERE id = $2")
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
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
