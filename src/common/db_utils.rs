// src/common/db_utils.rs
//
// Construtor de filtros opcionais: cada predicado só entra na consulta se o
// valor estiver presente, e SEMPRE como parâmetro vinculado. O servidor
// antigo concatenava fragmentos de SQL na mão; aqui isso é proibido.

use sqlx::{Postgres, QueryBuilder};

pub struct FilterBuilder<'args> {
    qb: QueryBuilder<'args, Postgres>,
    has_where: bool,
}

impl<'args> FilterBuilder<'args> {
    // Base sem cláusula WHERE; o primeiro filtro presente a introduz.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            qb: QueryBuilder::new(base),
            has_where: false,
        }
    }

    // Base que já contém um WHERE fixo; filtros viram "AND ...".
    pub fn with_where(base: impl Into<String>) -> Self {
        Self {
            qb: QueryBuilder::new(base),
            has_where: true,
        }
    }

    // `expression` é sempre um literal do nosso código (nome de coluna ou
    // expressão SQL), nunca entrada do usuário.
    pub fn and_eq<T>(&mut self, expression: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + sqlx::Encode<'args, Postgres> + sqlx::Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.push_connective();
            self.qb.push(expression);
            self.qb.push(" = ");
            self.qb.push_bind(value);
        }
        self
    }

    // Sufixos fixos (GROUP BY / ORDER BY / LIMIT).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.qb.push(sql);
        self
    }

    pub fn sql(&self) -> &str {
        self.qb.sql()
    }

    pub fn into_query_builder(self) -> QueryBuilder<'args, Postgres> {
        self.qb
    }

    fn push_connective(&mut self) {
        if self.has_where {
            self.qb.push(" AND ");
        } else {
            self.qb.push(" WHERE ");
            self.has_where = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sem_filtros_nao_ha_where() {
        let mut builder = FilterBuilder::new("SELECT * FROM requests");
        builder.and_eq::<i32>("my_status", None);
        builder.push(" ORDER BY pickup_date");
        assert_eq!(builder.sql(), "SELECT * FROM requests ORDER BY pickup_date");
    }

    #[test]
    fn primeiro_filtro_introduz_o_where() {
        let mut builder = FilterBuilder::new("SELECT * FROM requests");
        builder.and_eq("status", Some("pending"));
        builder.and_eq("my_status", Some(3i32));
        assert_eq!(
            builder.sql(),
            "SELECT * FROM requests WHERE status = $1 AND my_status = $2"
        );
    }

    #[test]
    fn base_com_where_fixo_usa_and() {
        let mut builder = FilterBuilder::with_where("SELECT 1 FROM requests WHERE my_status = 3");
        builder.and_eq("branch_id", Some(9i64));
        assert_eq!(
            builder.sql(),
            "SELECT 1 FROM requests WHERE my_status = 3 AND branch_id = $1"
        );
    }

    #[test]
    fn filtros_ausentes_sao_ignorados() {
        let mut builder = FilterBuilder::with_where("SELECT 1 FROM requests WHERE my_status = 3");
        builder.and_eq::<i64>("branch_id", None);
        builder.and_eq("b.client_id", Some(2i64));
        builder.and_eq::<i32>("EXTRACT(YEAR FROM pickup_date)", None);
        assert_eq!(
            builder.sql(),
            "SELECT 1 FROM requests WHERE my_status = 3 AND b.client_id = $1"
        );
    }
}
