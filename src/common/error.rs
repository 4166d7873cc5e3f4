use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// Cada variante mapeia para um status HTTP + corpo JSON estruturado.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Lista de campos obrigatórios ausentes ou em branco no payload.
    #[error("Campos obrigatórios ausentes: {0:?}")]
    MissingFields(Vec<String>),

    #[error("Formato de e-mail inválido")]
    InvalidEmail,

    // Corpo da requisição vazio ou JSON malformado.
    // Distinto dos erros de validação de campo, como o frontend espera.
    #[error("Corpo da requisição inválido")]
    InvalidPayload(#[from] JsonRejection),

    #[error("Credenciais ausentes")]
    MissingCredentials,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    // Guarda o "tipo" do registro ("Quote", "Contact") para a mensagem.
    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // Falha no provedor de e-mail quando o envio é parte essencial da
    // operação (resposta do admin). Na entrada de leads o envio é
    // melhor-esforço e nunca vira este erro.
    #[error("Falha no envio de e-mail: {0}")]
    EmailDispatch(String),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    // Helper para erros de campo único fora do derive do `validator`
    // (ex.: serviceType com valor desconhecido).
    pub fn invalid_field(field: &'static str, message: &str) -> Self {
        let mut errors = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("invalid_value");
        error.message = Some(message.to_string().into());
        errors.add(field, error);

        AppError::ValidationError(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
                Some(format!("Required fields: {}", fields.join(", "))),
            ),
            AppError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "Invalid email format".to_string(),
                Some("Please enter a valid email address".to_string()),
            ),
            AppError::InvalidPayload(rejection) => (
                StatusCode::BAD_REQUEST,
                "Invalid JSON in request body".to_string(),
                Some(rejection.body_text()),
            ),
            AppError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Username and password are required".to_string(),
                None,
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
                None,
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing authentication token".to_string(),
                None,
            ),
            AppError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                format!("{kind} not found"),
                None,
            ),
            // O console do admin mostra a mensagem específica do backend.
            AppError::EmailDispatch(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email. Please check your email configuration.".to_string(),
                Some(reason),
            ),
            // Todos os outros erros viram 500 genérico.
            // O detalhe fica apenas no log, nunca na resposta.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => Json(json!({ "error": error_message, "details": details })),
            None => Json(json!({ "error": error_message })),
        };
        (status, body).into_response()
    }
}
