// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    models::admin::{AdminUser, Claims},
};

const ADMIN_ROLE: &str = "admin";
const SESSION_HOURS: i64 = 24;

// Sessão do painel: identidade única compartilhada, token JWT assinado.
// O site original emitia um blob base64 sem assinatura; aqui a expiração
// e a integridade são verificadas no servidor a cada requisição guardada.
#[derive(Clone)]
pub struct AdminAuthService {
    username: String,
    password_hash: String,
    jwt_secret: String,
}

impl AdminAuthService {
    pub fn new(username: String, password_hash: String, jwt_secret: String) -> Self {
        Self {
            username,
            password_hash,
            jwt_secret,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(String, AdminUser), AppError> {
        // Comparação case-sensitive, com espaços das bordas ignorados
        let username = username.trim();
        if username != self.username {
            return Err(AppError::InvalidCredentials);
        }

        let password = password.to_owned();
        let hash = self.password_hash.clone();

        // Verificação de bcrypt em thread separada, fora do executor
        let is_password_valid = tokio::task::spawn_blocking(move || verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(username)?;
        Ok((
            token,
            AdminUser {
                username: username.to_string(),
                role: ADMIN_ROLE.to_string(),
            },
        ))
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminUser, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let claims = token_data.claims;
        if claims.role != ADMIN_ROLE {
            return Err(AppError::InvalidToken);
        }

        Ok(AdminUser {
            username: claims.sub,
            role: claims.role,
        })
    }

    fn create_token(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(SESSION_HOURS);

        let claims = Claims {
            sub: username.to_string(),
            role: ADMIN_ROLE.to_string(),
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
