// src/config.rs

use std::env;
use std::sync::Arc;

use crate::{
    db::{LeadRepository, MemoryLeadStore, TestimonialStore},
    models::contact::Contact,
    models::quote::Quote,
    services::admin_service::AdminService,
    services::auth::AdminAuthService,
    services::contact_service::ContactService,
    services::email_service::{EmailConfig, EmailService},
    services::quote_service::QuoteService,
};

const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_EMAIL_FROM: &str = "AmeriTrust Insurance <notifications@mail.ameritrust-ins.com>";
const DEFAULT_ADMIN_RECIPIENTS: &str =
    "quotes@ameritrust-ins.com,admin@ameritrust-ins.com,ameritrustgeneral@gmail.com";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

// Tudo que vem do ambiente, lido uma única vez na subida.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub resend_api_key: String,
    pub resend_api_url: String,
    pub email_from: String,
    pub resend_sandbox: bool,
    pub admin_notify_emails: Vec<String>,
    pub admin_username: String,
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub public_base_url: String,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT inválida: {raw}"))?,
            Err(_) => 3000,
        };

        // Segredos não têm default: sem eles a aplicação não deve subir
        let admin_password_hash = env::var("ADMIN_PASSWORD_HASH")
            .map_err(|_| anyhow::anyhow!("ADMIN_PASSWORD_HASH deve ser definida"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET deve ser definido"))?;

        let admin_notify_emails = env::var("ADMIN_NOTIFY_EMAILS")
            .unwrap_or_else(|_| DEFAULT_ADMIN_RECIPIENTS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            port,
            resend_api_key: env::var("RESEND_API_KEY").unwrap_or_default(),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
            email_from: env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.to_string()),
            resend_sandbox: env::var("RESEND_SANDBOX")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            admin_notify_emails,
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password_hash,
            jwt_secret,
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub quote_service: QuoteService,
    pub contact_service: ContactService,
    pub testimonial_store: Arc<TestimonialStore>,
    pub auth_service: AdminAuthService,
    pub admin_service: AdminService,
}

impl AppState {
    // --- Monta o gráfico de dependências ---
    pub fn from_settings(settings: Settings) -> Self {
        let email_service = EmailService::new(EmailConfig {
            api_key: settings.resend_api_key,
            api_url: settings.resend_api_url,
            from: settings.email_from,
            sandbox: settings.resend_sandbox,
            admin_recipients: settings.admin_notify_emails,
            public_base_url: settings.public_base_url,
        });

        // Armazéns em memória atrás do trait: trocar por um banco no
        // futuro só muda estas duas linhas
        let quote_store: Arc<dyn LeadRepository<Quote>> = Arc::new(MemoryLeadStore::new());
        let contact_store: Arc<dyn LeadRepository<Contact>> = Arc::new(MemoryLeadStore::new());

        let quote_service = QuoteService::new(quote_store.clone(), email_service.clone());
        let contact_service = ContactService::new(contact_store.clone());
        let admin_service = AdminService::new(quote_store, contact_store, email_service);

        let auth_service = AdminAuthService::new(
            settings.admin_username,
            settings.admin_password_hash,
            settings.jwt_secret,
        );

        Self {
            quote_service,
            contact_service,
            testimonial_store: Arc::new(TestimonialStore::new()),
            auth_service,
            admin_service,
        }
    }
}
