// src/db/sos_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::sos::Sos};

const SOS_SELECT: &str = "SELECT s.*, st.name AS guard_name
     FROM sos s
     LEFT JOIN staff st ON s.guard_id = st.id";

#[derive(Clone)]
pub struct SosRepository {
    pool: PgPool,
}

impl SosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Sos>, AppError> {
        let alerts =
            sqlx::query_as::<_, Sos>(&format!("{SOS_SELECT} ORDER BY s.created_at DESC"))
                .fetch_all(&self.pool)
                .await?;
        Ok(alerts)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Sos>, AppError> {
        let alert = sqlx::query_as::<_, Sos>(&format!("{SOS_SELECT} WHERE s.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(alert)
    }

    // O status já chega validado pelo handler (pending/in_progress/resolved)
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
        comment: Option<&str>,
    ) -> Result<Option<Sos>, AppError> {
        let result =
            sqlx::query("UPDATE sos SET status = $1, comment = $2, updated_at = now() WHERE id = $3")
                .bind(status)
                .bind(comment)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find(id).await
    }
}
