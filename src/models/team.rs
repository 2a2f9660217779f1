// src/models/team.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// O cargo que define quem comanda a equipe. A derivação pega o PRIMEIRO
// membro da lista enviada que tiver esse cargo; nenhum membro com o cargo
// não é erro, a equipe apenas fica sem comandante.
pub const CREW_COMMANDER_ROLE: &str = "Team Leader";

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub crew_commander_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// Um membro dentro do read-model aninhado da equipe
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub photo_url: Option<String>,
    pub empl_no: Option<String>,
    pub id_no: Option<String>,
    pub status: i16,
}

// Equipe + lista de membros, montada em código com duas consultas
// (nada de JSON_ARRAYAGG do lado do banco).
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamWithMembers {
    pub id: i64,
    pub name: String,
    pub crew_commander_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<TeamMember>,
}

impl TeamWithMembers {
    pub fn new(team: Team, members: Vec<TeamMember>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            crew_commander_id: team.crew_commander_id,
            created_at: team.created_at,
            members,
        }
    }
}

// Os campos ficam opcionais para que ausência vire 400 com mensagem,
// e não uma rejeição de desserialização.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTeamPayload {
    pub name: Option<String>,
    pub members: Option<Vec<i64>>,
}

impl CreateTeamPayload {
    // Nome e lista precisam estar presentes; a lista PODE ser vazia (equipe
    // sem membros e sem comandante é um estado legítimo).
    pub fn validated(&self) -> Result<(&str, &[i64]), String> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| "O nome da equipe é obrigatório.".to_string())?;

        let members = self
            .members
            .as_deref()
            .ok_or_else(|| "A lista de membros é obrigatória.".to_string())?;

        Ok((name, members))
    }
}

#[derive(Debug, Deserialize)]
pub struct ListTeamsQuery {
    pub today: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lista_de_membros_vazia_e_aceita() {
        let payload = CreateTeamPayload {
            name: Some("Equipe Noturna".into()),
            members: Some(vec![]),
        };
        let (name, members) = payload.validated().unwrap();
        assert_eq!(name, "Equipe Noturna");
        assert!(members.is_empty());
    }

    #[test]
    fn nome_ausente_ou_em_branco_e_rejeitado() {
        let sem_nome = CreateTeamPayload {
            members: Some(vec![1]),
            ..Default::default()
        };
        assert!(sem_nome.validated().is_err());

        let em_branco = CreateTeamPayload {
            name: Some("   ".into()),
            members: Some(vec![1]),
        };
        assert!(em_branco.validated().is_err());
    }

    #[test]
    fn lista_de_membros_ausente_e_rejeitada() {
        let payload = CreateTeamPayload {
            name: Some("Equipe Alfa".into()),
            ..Default::default()
        };
        assert!(payload.validated().is_err());
    }
}
