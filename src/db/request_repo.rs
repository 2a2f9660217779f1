// src/db/request_repo.rs
//
// A tabela `requests` é o coração do despacho. Filtros opcionais passam pelo
// FilterBuilder; o patch parcial monta o SET dinamicamente com binds.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    common::{db_utils::FilterBuilder, error::AppError},
    models::request::{
        CreateRequestPayload, DateSummary, RequestListQuery, RequestRow, SummaryQuery,
        UpdateRequestPayload,
    },
};

const REQUEST_SELECT: &str = "SELECT r.*, b.name AS branch_name, st.name AS service_type_name
     FROM requests r
     LEFT JOIN branches b ON r.branch_id = b.id
     LEFT JOIN service_types st ON r.service_type_id = st.id";

#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &RequestListQuery) -> Result<Vec<RequestRow>, AppError> {
        let mut builder = FilterBuilder::new(REQUEST_SELECT);
        builder.and_eq("r.pickup_date::date", query.date);
        builder.and_eq("r.status", query.status.clone());
        builder.and_eq("r.my_status", query.my_status);
        builder.push(" ORDER BY r.pickup_date ASC");

        let rows = builder
            .into_query_builder()
            .build_query_as::<RequestRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<RequestRow>, AppError> {
        let row = sqlx::query_as::<_, RequestRow>(&format!("{REQUEST_SELECT} WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    // Insere com status 'pending'; prioridade e my_status já vêm resolvidos
    // pelo serviço (defaults do caller).
    pub async fn create(
        &self,
        payload: &CreateRequestPayload,
        priority: &str,
        my_status: i32,
    ) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO requests (
                user_id, user_name, service_type_id, branch_id,
                pickup_location, delivery_location, pickup_date,
                description, priority, status, my_status, price,
                latitude, longitude
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending', $10, $11, $12, $13)
             RETURNING id",
        )
        .bind(payload.user_id)
        .bind(&payload.user_name)
        .bind(payload.service_type_id)
        .bind(payload.branch_id)
        .bind(&payload.pickup_location)
        .bind(&payload.delivery_location)
        .bind(payload.pickup_date)
        .bind(&payload.description)
        .bind(priority)
        .bind(my_status)
        .bind(payload.price)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    // SET dinâmico: só o que veio no patch entra no UPDATE. `staff_id` chega
    // já resolvido pelo serviço (propagação do comandante tem precedência
    // sobre um staff_id enviado à mão).
    pub async fn update_partial(
        &self,
        id: i64,
        payload: &UpdateRequestPayload,
        staff_id: Option<i64>,
    ) -> Result<u64, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE requests SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(v) = &payload.user_name {
                set.push("user_name = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = payload.service_type_id {
                set.push("service_type_id = ").push_bind_unseparated(v);
            }
            if let Some(v) = payload.branch_id {
                set.push("branch_id = ").push_bind_unseparated(v);
            }
            if let Some(v) = &payload.pickup_location {
                set.push("pickup_location = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = &payload.delivery_location {
                set.push("delivery_location = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = payload.pickup_date {
                set.push("pickup_date = ").push_bind_unseparated(v);
            }
            if let Some(v) = &payload.description {
                set.push("description = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = &payload.priority {
                set.push("priority = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = &payload.status {
                set.push("status = ").push_bind_unseparated(v.clone());
            }
            if let Some(v) = payload.my_status {
                set.push("my_status = ").push_bind_unseparated(v);
            }
            if let Some(v) = payload.price {
                set.push("price = ").push_bind_unseparated(v);
            }
            if let Some(v) = payload.latitude {
                set.push("latitude = ").push_bind_unseparated(v);
            }
            if let Some(v) = payload.longitude {
                set.push("longitude = ").push_bind_unseparated(v);
            }
            if let Some(v) = payload.team_id {
                set.push("team_id = ").push_bind_unseparated(v);
            }
            if let Some(v) = staff_id {
                set.push("staff_id = ").push_bind_unseparated(v);
            }
            set.push("updated_at = now()");
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    // Caminho estreito de status; `end_time` ausente preserva o valor atual.
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE requests
             SET status = $1, end_time = COALESCE($2, end_time), updated_at = now()
             WHERE id = $3",
        )
        .bind(status)
        .bind(end_time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // Agregado diário sobre as corridas faturáveis (my_status = 3), agrupado
    // pela data de coleta.
    pub async fn summaries(&self, query: &SummaryQuery) -> Result<Vec<DateSummary>, AppError> {
        let rows = summaries_query(query)
            .into_query_builder()
            .build_query_as::<DateSummary>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

// Monta a consulta dos agregados diários. Sem recorte de ano/mês a listagem
// para nos 30 grupos mais recentes; com qualquer recorte o período já é
// finito e o LIMIT sai.
fn summaries_query(query: &SummaryQuery) -> FilterBuilder<'static> {
    let mut builder = FilterBuilder::with_where(
        "SELECT r.pickup_date::date AS date,
                COUNT(*) AS total_runs,
                COUNT(*) FILTER (WHERE r.status = 'completed') AS total_runs_completed,
                COALESCE(SUM(r.price), 0) AS total_amount,
                COALESCE(SUM(r.price) FILTER (WHERE r.status = 'completed'), 0)
                    AS total_amount_completed
         FROM requests r
         LEFT JOIN branches b ON r.branch_id = b.id
         WHERE r.my_status = 3",
    );
    builder.and_eq("EXTRACT(YEAR FROM r.pickup_date)", query.year);
    builder.and_eq("EXTRACT(MONTH FROM r.pickup_date)", query.month);
    builder.and_eq("b.client_id", query.client_id);
    builder.and_eq("r.branch_id", query.branch_id);
    builder.push(" GROUP BY r.pickup_date::date ORDER BY date DESC");
    if query.year.is_none() && query.month.is_none() {
        builder.push(" LIMIT 30");
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consulta_vazia() -> SummaryQuery {
        SummaryQuery {
            year: None,
            month: None,
            client_id: None,
            branch_id: None,
        }
    }

    #[test]
    fn agregado_sem_recorte_limita_aos_30_mais_recentes() {
        let sql = summaries_query(&consulta_vazia()).sql().to_string();
        assert!(sql.contains("WHERE r.my_status = 3"));
        assert!(sql.contains("GROUP BY r.pickup_date::date ORDER BY date DESC"));
        assert!(sql.ends_with(" LIMIT 30"));
    }

    #[test]
    fn agregado_com_ano_nao_tem_limit() {
        let query = SummaryQuery {
            year: Some(2025),
            ..consulta_vazia()
        };
        let sql = summaries_query(&query).sql().to_string();
        assert!(sql.contains("AND EXTRACT(YEAR FROM r.pickup_date) = $1"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn agregado_com_mes_nao_tem_limit() {
        let query = SummaryQuery {
            month: Some(7),
            ..consulta_vazia()
        };
        let sql = summaries_query(&query).sql().to_string();
        assert!(sql.contains("AND EXTRACT(MONTH FROM r.pickup_date) = $1"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn filtros_de_cliente_e_filial_mantem_o_limit() {
        let query = SummaryQuery {
            client_id: Some(4),
            branch_id: Some(9),
            ..consulta_vazia()
        };
        let sql = summaries_query(&query).sql().to_string();
        assert!(sql.contains("AND b.client_id = $1"));
        assert!(sql.contains("AND r.branch_id = $2"));
        assert!(sql.ends_with(" LIMIT 30"));
    }
}
