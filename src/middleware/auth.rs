// src/middleware/auth.rs

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::admin::AdminUser};

// Middleware que protege as rotas do console do admin. Valida assinatura
// e expiração do JWT a cada requisição; não existe lista de revogação.
pub async fn admin_guard(
    State(app_state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            let admin = app_state.auth_service.validate_token(token)?;

            // Insere o admin nos "extensions" da requisição
            request.extensions_mut().insert(admin);
            return Ok(next.run(request).await);
        }
    }

    Err(AppError::InvalidToken)
}

// Extrator para obter a sessão autenticada diretamente nos handlers
pub struct AdminSession(pub AdminUser);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .map(AdminSession)
            .ok_or(AppError::InvalidToken)
    }
}
