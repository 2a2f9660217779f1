// src/services/team_service.rs
//
// Composição de equipes: resolve os cargos do lote de membros, deriva o
// comandante e grava equipe + vínculos numa transação só. O servidor antigo
// inseria os vínculos um a um fora de transação e podia deixar uma equipe
// pela metade; aqui é tudo-ou-nada.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{StaffRepository, TeamRepository, staff_repo::StaffRole},
    models::team::{CREW_COMMANDER_ROLE, TeamWithMembers},
};

// O comandante é o PRIMEIRO membro, na ordem enviada, com o cargo de líder.
// Ninguém com o cargo não é erro: a equipe fica sem comandante.
pub fn derive_crew_commander(member_ids: &[i64], roles: &[StaffRole]) -> Option<i64> {
    let role_by_id: HashMap<i64, &str> =
        roles.iter().map(|r| (r.id, r.role.as_str())).collect();
    member_ids
        .iter()
        .copied()
        .find(|id| role_by_id.get(id).copied() == Some(CREW_COMMANDER_ROLE))
}

#[derive(Clone)]
pub struct TeamService {
    team_repo: TeamRepository,
    staff_repo: StaffRepository,
    pool: PgPool,
}

impl TeamService {
    pub fn new(team_repo: TeamRepository, staff_repo: StaffRepository, pool: PgPool) -> Self {
        Self { team_repo, staff_repo, pool }
    }

    pub async fn create_team(
        &self,
        name: &str,
        member_ids: &[i64],
    ) -> Result<TeamWithMembers, AppError> {
        // Uma consulta para os cargos de todos os membros
        let roles = self.staff_repo.find_roles(member_ids).await?;
        let crew_commander_id = derive_crew_commander(member_ids, &roles);

        let mut tx = self.pool.begin().await?;

        let team = self
            .team_repo
            .insert_team(&mut *tx, name, crew_commander_id)
            .await?;

        // Qualquer vínculo que falhar derruba a transação inteira
        for &staff_id in member_ids {
            self.team_repo.insert_member(&mut *tx, team.id, staff_id).await?;
        }

        tx.commit().await?;
        tracing::info!("Equipe {} criada com {} membro(s).", team.id, member_ids.len());

        // Releitura do read-model aninhado: a resposta é o que ficou gravado
        self.team_repo.find_with_members(team.id).await?.ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!(
                "Equipe recém-criada ({}) não pôde ser relida.",
                team.id
            ))
        })
    }

    pub async fn list_teams(&self, today_only: bool) -> Result<Vec<TeamWithMembers>, AppError> {
        self.team_repo.list_with_members(today_only).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i64, role: &str) -> StaffRole {
        StaffRole { id, role: role.into() }
    }

    #[test]
    fn primeiro_lider_na_ordem_enviada_vence() {
        // O banco devolve as linhas fora de ordem de propósito
        let roles = vec![
            role(30, CREW_COMMANDER_ROLE),
            role(10, "Driver"),
            role(20, CREW_COMMANDER_ROLE),
        ];
        let commander = derive_crew_commander(&[10, 20, 30], &roles);
        assert_eq!(commander, Some(20));
    }

    #[test]
    fn sem_lider_nao_ha_comandante() {
        let roles = vec![role(1, "Driver"), role(2, "Guard")];
        assert_eq!(derive_crew_commander(&[1, 2], &roles), None);
    }

    #[test]
    fn lista_vazia_nao_ha_comandante() {
        assert_eq!(derive_crew_commander(&[], &[]), None);
    }

    #[test]
    fn membro_inexistente_e_ignorado_na_derivacao() {
        // O id 99 não veio do banco; a derivação só olha quem existe
        let roles = vec![role(2, CREW_COMMANDER_ROLE)];
        assert_eq!(derive_crew_commander(&[99, 2], &roles), Some(2));
    }
}
