// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User},
};

// Validade do token de sessão
const TOKEN_VALIDITY_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self { user_repo, jwt_secret }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        // bcrypt é pesado; roda fora do executor async
        let password = password.to_owned();
        let password_hash = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(&user)?;
        Ok((token, user))
    }

    // Usado pelo guard e pelo extrator de identidade opcional; não toca no
    // banco, a identidade vive nas claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;
        Ok(token_data.claims)
    }

    fn create_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(TOKEN_VALIDITY_HOURS);

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> AuthService {
        // Pool "lazy": nenhum teste aqui abre conexão de verdade.
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/teste").unwrap();
        AuthService::new(UserRepository::new(pool), "segredo-de-teste".into())
    }

    fn sample_user() -> User {
        User {
            id: 42,
            username: "controle".into(),
            email: Some("controle@example.com".into()),
            password_hash: "irrelevante".into(),
            role: "admin".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn token_carrega_identidade_e_validade_de_24h() {
        let service = service();
        let user = sample_user();

        let token = service.create_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "controle");
        assert_eq!(claims.role, "admin");
        // 24 horas, com folga de alguns segundos de execução
        let validity = claims.exp as i64 - claims.iat as i64;
        assert_eq!(validity, TOKEN_VALIDITY_HOURS * 3600);
    }

    #[tokio::test]
    async fn token_adulterado_e_rejeitado() {
        let service = service();
        let token = service.create_token(&sample_user()).unwrap();
        let mut forged = token.clone();
        forged.pop();

        assert!(matches!(service.verify_token(&forged), Err(AppError::InvalidToken)));
        assert!(matches!(service.verify_token("lixo"), Err(AppError::InvalidToken)));
    }
}
