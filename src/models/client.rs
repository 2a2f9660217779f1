// src/models/client.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub account_number: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// O mesmo "formulário" serve para criar e atualizar
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ClientPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(length(min = 1, message = "O número de conta é obrigatório."))]
    pub account_number: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mensagens(payload: &ClientPayload) -> Vec<String> {
        let erros = payload.validate().unwrap_err();
        erros
            .field_errors()
            .values()
            .flat_map(|erros| erros.iter())
            .filter_map(|erro| erro.message.as_ref().map(|m| m.to_string()))
            .collect()
    }

    #[test]
    fn campos_em_branco_respondem_com_as_mensagens_em_portugues() {
        let payload = ClientPayload {
            name: String::new(),
            account_number: String::new(),
            email: "contato@exemplo.com".to_string(),
            phone: None,
            address: None,
        };
        let mensagens = mensagens(&payload);
        assert!(mensagens.contains(&"O nome é obrigatório.".to_string()));
        assert!(mensagens.contains(&"O número de conta é obrigatório.".to_string()));
    }

    #[test]
    fn email_invalido_tem_mensagem_propria() {
        let payload = ClientPayload {
            name: "Acme".to_string(),
            account_number: "ACC-1".to_string(),
            email: "sem-arroba".to_string(),
            phone: None,
            address: None,
        };
        assert_eq!(
            mensagens(&payload),
            vec!["O e-mail fornecido é inválido.".to_string()]
        );
    }

    #[test]
    fn formulario_completo_passa_na_validacao() {
        let payload = ClientPayload {
            name: "Acme".to_string(),
            account_number: "ACC-1".to_string(),
            email: "contato@exemplo.com".to_string(),
            phone: Some("11 99999-0000".to_string()),
            address: None,
        };
        assert!(payload.validate().is_ok());
    }
}
