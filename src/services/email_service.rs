// src/services/email_service.rs

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::quote::Quote;
use crate::services::email_templates;

// Falhas do despachante são sempre valores, nunca panics. Quem chama
// decide se a falha derruba a operação (resposta do admin) ou não (entrada).
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid or missing RESEND_API_KEY. Set a live key (starts with `re_`) in the environment.")]
    InvalidApiKey,

    #[error("no admin notification recipients configured")]
    NoRecipients,

    #[error("email provider rejected the message: {0}")]
    Provider(String),

    #[error("email provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

// Status secundário de uma notificação melhor-esforço, separado do
// sucesso da operação principal para os testes afirmarem os dois.
#[derive(Debug, Clone)]
pub enum Delivery {
    Delivered { message_id: String, recipients: usize },
    Degraded { warning: String },
    Unavailable { error: String },
}

// Projeção do Delivery no formato que o frontend já conhece.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailStatus {
    pub admin_notifications_sent: usize,
    pub email_service_working: bool,
}

impl From<&Delivery> for EmailStatus {
    fn from(delivery: &Delivery) -> Self {
        match delivery {
            Delivery::Delivered { recipients, .. } => EmailStatus {
                admin_notifications_sent: *recipients,
                email_service_working: true,
            },
            Delivery::Degraded { .. } | Delivery::Unavailable { .. } => EmailStatus {
                admin_notifications_sent: 0,
                email_service_working: false,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_key: String,
    pub api_url: String,
    pub from: String,
    pub sandbox: bool,
    pub admin_recipients: Vec<String>,
    pub public_base_url: String,
}

#[derive(Deserialize)]
struct ProviderResponse {
    id: String,
}

// Despachante de e-mail sobre a API HTTP do Resend.
#[derive(Clone)]
pub struct EmailService {
    http: reqwest::Client,
    config: Arc<EmailConfig>,
}

// Chave "live" do provedor: `re_` seguido de 32+ caracteres url-safe.
fn api_key_looks_valid(key: &str) -> bool {
    match key.strip_prefix("re_") {
        Some(rest) => {
            rest.len() >= 32
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        None => false,
    }
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn public_base_url(&self) -> &str {
        &self.config.public_base_url
    }

    // Envio genérico. Valida a forma da credencial ANTES de qualquer
    // chamada de rede; em sandbox devolve sucesso sintético para previews.
    pub async fn send(
        &self,
        to: &[String],
        subject: &str,
        html: &str,
    ) -> Result<String, EmailError> {
        if !api_key_looks_valid(&self.config.api_key) {
            return Err(EmailError::InvalidApiKey);
        }

        if self.config.sandbox {
            tracing::info!("📨 Modo sandbox: pulando envio real para {:?} ({subject})", to);
            return Ok("sandbox-message-id".to_string());
        }

        let body = serde_json::json!({
            "from": self.config.from,
            "to": to,
            "subject": subject,
            "html": html,
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(EmailError::Provider(format!("{status}: {detail}")));
        }

        let parsed: ProviderResponse = response.json().await?;
        tracing::info!("✅ E-mail aceito pelo provedor, message_id={}", parsed.id);
        Ok(parsed.id)
    }

    // Alerta da equipe sobre um novo orçamento. Nunca retorna Err: o
    // resultado é um status secundário que a entrada de leads reporta.
    pub async fn notify_new_quote(&self, quote: &Quote) -> Delivery {
        let recipients = &self.config.admin_recipients;
        if recipients.is_empty() {
            return Delivery::Unavailable {
                error: EmailError::NoRecipients.to_string(),
            };
        }

        let (subject, html) = email_templates::admin_quote_alert(quote);
        match self.send(recipients, &subject, &html).await {
            Ok(message_id) => Delivery::Delivered {
                message_id,
                recipients: recipients.len(),
            },
            Err(err @ EmailError::InvalidApiKey) | Err(err @ EmailError::NoRecipients) => {
                Delivery::Unavailable {
                    error: err.to_string(),
                }
            }
            Err(err) => Delivery::Degraded {
                warning: err.to_string(),
            },
        }
    }

    pub async fn send_quote_confirmation(&self, quote: &Quote) -> Result<String, EmailError> {
        let (subject, html) =
            email_templates::quote_confirmation(quote, &self.config.public_base_url);
        self.send(std::slice::from_ref(&quote.email), &subject, &html)
            .await
    }

    pub async fn send_quote_reply(
        &self,
        to: &str,
        customer_name: &str,
        service_type: &str,
        message: &str,
    ) -> Result<String, EmailError> {
        let (subject, html) = email_templates::quote_reply(customer_name, service_type, message);
        self.send(&[to.to_string()], &subject, &html).await
    }

    pub async fn send_contact_reply(
        &self,
        to: &str,
        customer_name: &str,
        original_subject: &str,
        message: &str,
    ) -> Result<String, EmailError> {
        let (subject, html) =
            email_templates::contact_reply(customer_name, original_subject, message);
        self.send(&[to.to_string()], &subject, &html).await
    }

    pub async fn send_test(&self, to: &str, subject: &str, content: &str) -> Result<String, EmailError> {
        let html = email_templates::test_message(content);
        self.send(&[to.to_string()], subject, &html).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_KEY: &str = "re_0123456789abcdefghijklmnopqrstuvwxyz";

    fn config(api_key: &str, sandbox: bool) -> EmailConfig {
        EmailConfig {
            api_key: api_key.to_string(),
            // Endereço inválido de propósito: nenhum teste deve tocar a rede
            api_url: "http://invalid.invalid/emails".to_string(),
            from: "AmeriTrust Insurance <notifications@mail.ameritrust-ins.com>".to_string(),
            sandbox,
            admin_recipients: vec!["team@example.com".to_string()],
            public_base_url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn valida_forma_da_chave() {
        assert!(api_key_looks_valid(VALID_KEY));
        assert!(api_key_looks_valid("re_AbC-123_456789012345678901234567890xyz"));
        assert!(!api_key_looks_valid(""));
        assert!(!api_key_looks_valid("sk_0123456789abcdefghijklmnopqrstuvwxyz"));
        assert!(!api_key_looks_valid("re_curta"));
        assert!(!api_key_looks_valid("re_0123456789abcdefghij klmnopqrstuvwxyz"));
    }

    #[tokio::test]
    async fn chave_invalida_falha_sem_rede() {
        let service = EmailService::new(config("", false));
        let result = service
            .send(&["a@b.com".to_string()], "subject", "<p>hi</p>")
            .await;
        assert!(matches!(result, Err(EmailError::InvalidApiKey)));
    }

    #[tokio::test]
    async fn sandbox_devolve_sucesso_sintetico() {
        let service = EmailService::new(config(VALID_KEY, true));
        let id = service
            .send(&["a@b.com".to_string()], "subject", "<p>hi</p>")
            .await
            .unwrap();
        assert_eq!(id, "sandbox-message-id");
    }

    #[test]
    fn delivery_vira_email_status() {
        let delivered = Delivery::Delivered {
            message_id: "x".into(),
            recipients: 3,
        };
        let status = EmailStatus::from(&delivered);
        assert_eq!(status.admin_notifications_sent, 3);
        assert!(status.email_service_working);

        let degraded = Delivery::Degraded {
            warning: "provider down".into(),
        };
        let status = EmailStatus::from(&degraded);
        assert_eq!(status.admin_notifications_sent, 0);
        assert!(!status.email_service_working);
    }
}
