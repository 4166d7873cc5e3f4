// src/handlers/admin.rs

use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AdminSession,
    models::admin::{LoginPayload, LoginResponse, ReplyPayload, TestEmailPayload},
};

// POST /api/admin/login
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sessão aberta", body = LoginResponse),
        (status = 400, description = "Credenciais ausentes"),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.as_deref().map(str::trim).unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    // Ausência de credenciais é 400, não 401: o cliente nem tentou
    if username.is_empty() || password.is_empty() {
        return Err(AppError::MissingCredentials);
    }

    let (token, user) = app_state.auth_service.login(username, password).await?;
    tracing::info!("✅ Login do admin '{}'", user.username);

    Ok(Json(LoginResponse {
        success: true,
        token,
        user,
    }))
}

// POST /api/admin/reply (protegida pelo admin_guard)
#[utoipa::path(
    post,
    path = "/api/admin/reply",
    tag = "Admin",
    request_body = ReplyPayload,
    security(("api_jwt" = [])),
    responses(
        (status = 200, description = "Resposta enviada e lead marcado como 'contacted'"),
        (status = 400, description = "Campos obrigatórios ausentes"),
        (status = 401, description = "Token ausente/inválido/expirado"),
        (status = 404, description = "Lead original não encontrado"),
        (status = 500, description = "Falha no envio; o status do lead não muda")
    )
)]
pub async fn reply(
    State(app_state): State<AppState>,
    AdminSession(admin): AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<ReplyPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("📨 '{}' respondendo a um lead", admin.username);
    app_state.admin_service.reply(payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Reply sent successfully to customer's email",
        "emailSent": true,
        "sentAt": Utc::now(),
    })))
}

// POST /api/admin/test-email (protegida pelo admin_guard)
#[utoipa::path(
    post,
    path = "/api/admin/test-email",
    tag = "Admin",
    request_body = TestEmailPayload,
    security(("api_jwt" = [])),
    responses(
        (status = 200, description = "E-mail de teste aceito pelo provedor"),
        (status = 400, description = "Destinatário ausente"),
        (status = 401, description = "Token ausente/inválido/expirado"),
        (status = 500, description = "Provedor recusou ou está inacessível")
    )
)]
pub async fn test_email(
    State(app_state): State<AppState>,
    AdminSession(_admin): AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<TestEmailPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let message_id = app_state.admin_service.send_test_email(payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Test email sent successfully",
        "messageId": message_id,
    })))
}
