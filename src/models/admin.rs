// src/models/admin.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Identidade única compartilhada do painel. Não há contas por usuário.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

// Estrutura de dados ("claims") dentro do JWT da sessão do admin
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // username
    pub role: String, // sempre "admin"
    pub exp: usize,   // expira 24h após a emissão
    pub iat: usize,
}

// Dados para login. Opcionais de propósito: ausência vira 400
// "credenciais ausentes", não um erro de parse.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    #[schema(example = "admin")]
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: AdminUser,
}

// Qual fila de leads a operação do console atinge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    Quote,
    Contact,
}

// Corpo do POST /api/admin/reply. `to`, `subject`, `message`, `type` e
// `originalId` são obrigatórios; o restante alimenta o template.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyPayload {
    #[schema(example = "john.smith@email.com")]
    pub to: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<LeadKind>,
    pub original_id: Option<Uuid>,

    pub customer_name: Option<String>,
    pub service_type: Option<String>,
    pub original_subject: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestEmailPayload {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
