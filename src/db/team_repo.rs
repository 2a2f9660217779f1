// src/db/team_repo.rs

use std::collections::HashMap;

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::team::{Team, TeamMember, TeamWithMembers},
};

const MEMBER_SELECT: &str = "SELECT s.id, s.name, s.role, s.photo_url, s.empl_no, s.id_no, s.status
     FROM team_members tm
     JOIN staff s ON tm.staff_id = s.id";

#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // As escritas recebem o executor de fora: o TeamService roda equipe +
    // vínculos dentro de UMA transação (tudo-ou-nada).
    pub async fn insert_team<'e, E>(
        &self,
        executor: E,
        name: &str,
        crew_commander_id: Option<i64>,
    ) -> Result<Team, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, crew_commander_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(crew_commander_id)
        .fetch_one(executor)
        .await?;
        Ok(team)
    }

    pub async fn insert_member<'e, E>(
        &self,
        executor: E,
        team_id: i64,
        staff_id: i64,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("INSERT INTO team_members (team_id, staff_id) VALUES ($1, $2)")
            .bind(team_id)
            .bind(staff_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    // O comandante derivado em requests.staff_id quando uma equipe é
    // atribuída a uma corrida
    pub async fn find_crew_commander(&self, team_id: i64) -> Result<Option<i64>, AppError> {
        let commander = sqlx::query_scalar::<_, Option<i64>>(
            "SELECT crew_commander_id FROM teams WHERE id = $1",
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(commander.flatten())
    }

    // Read-model aninhado montado em código: uma consulta para a equipe,
    // outra para os membros. Equipe vazia -> lista vazia, nunca um null.
    pub async fn find_with_members(&self, id: i64) -> Result<Option<TeamWithMembers>, AppError> {
        let Some(team) = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let members = sqlx::query_as::<_, TeamMember>(&format!(
            "{MEMBER_SELECT} WHERE tm.team_id = $1 ORDER BY s.id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(TeamWithMembers::new(team, members)))
    }

    // Listagem com membros: equipes primeiro, depois UMA consulta para os
    // membros de todas elas, agrupados em memória.
    pub async fn list_with_members(
        &self,
        today_only: bool,
    ) -> Result<Vec<TeamWithMembers>, AppError> {
        let query = if today_only {
            "SELECT * FROM teams WHERE created_at::date = CURRENT_DATE ORDER BY created_at DESC"
        } else {
            "SELECT * FROM teams ORDER BY created_at DESC"
        };
        let teams = sqlx::query_as::<_, Team>(query).fetch_all(&self.pool).await?;

        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let team_ids: Vec<i64> = teams.iter().map(|t| t.id).collect();
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT tm.team_id, s.id, s.name, s.role, s.photo_url, s.empl_no, s.id_no, s.status
             FROM team_members tm
             JOIN staff s ON tm.staff_id = s.id
             WHERE tm.team_id = ANY($1)
             ORDER BY s.id",
        )
        .bind(&team_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_team: HashMap<i64, Vec<TeamMember>> = HashMap::new();
        for row in rows {
            by_team.entry(row.team_id).or_default().push(row.member);
        }

        Ok(teams
            .into_iter()
            .map(|team| {
                let members = by_team.remove(&team.id).unwrap_or_default();
                TeamWithMembers::new(team, members)
            })
            .collect())
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    team_id: i64,
    #[sqlx(flatten)]
    member: TeamMember,
}
