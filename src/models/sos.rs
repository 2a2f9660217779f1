// src/models/sos.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Os únicos estados que um alerta aceita. Qualquer outra coisa no PATCH de
// status é 400, nunca chega ao banco.
pub const SOS_STATUSES: [&str; 3] = ["pending", "in_progress", "resolved"];

pub fn is_valid_sos_status(status: &str) -> bool {
    SOS_STATUSES.contains(&status)
}

// Alerta já com o nome do guarda (LEFT JOIN em staff)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Sos {
    pub id: i64,
    pub guard_id: i64,
    pub guard_name: Option<String>,
    pub status: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SosStatusPayload {
    pub status: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_somente_os_tres_estados() {
        assert!(is_valid_sos_status("pending"));
        assert!(is_valid_sos_status("in_progress"));
        assert!(is_valid_sos_status("resolved"));

        assert!(!is_valid_sos_status("done"));
        assert!(!is_valid_sos_status("IN_PROGRESS"));
        assert!(!is_valid_sos_status(""));
    }
}
