// src/services/admin_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::admin::{LeadKind, ReplyPayload, TestEmailPayload},
    models::contact::Contact,
    models::lead::LeadStatus,
    models::quote::Quote,
};
use crate::services::email_service::EmailService;

// Operações do console de triagem que cruzam filas e e-mail.
#[derive(Clone)]
pub struct AdminService {
    quotes: Arc<dyn LeadRepository<Quote>>,
    contacts: Arc<dyn LeadRepository<Contact>>,
    email: EmailService,
}

impl AdminService {
    pub fn new(
        quotes: Arc<dyn LeadRepository<Quote>>,
        contacts: Arc<dyn LeadRepository<Contact>>,
        email: EmailService,
    ) -> Self {
        Self {
            quotes,
            contacts,
            email,
        }
    }

    // Resposta ao cliente. Aqui o e-mail NÃO é melhor-esforço: o admin
    // está esperando a confirmação, então falha de envio falha a operação
    // e o status do lead fica como estava. Só após o envio bem-sucedido o
    // lead vira "contacted" - a única transição automática do sistema.
    pub async fn reply(&self, payload: ReplyPayload) -> Result<(), AppError> {
        let mut missing = Vec::new();
        let mut require = |present: bool, field: &str| {
            if !present {
                missing.push(field.to_string());
            }
        };

        let to = payload.to.as_deref().map(str::trim).unwrap_or("");
        require(!to.is_empty(), "to");
        // `subject` é exigido pelo contrato do console, ainda que os
        // templates derivem o assunto final do tipo do lead
        require(
            payload.subject.as_deref().is_some_and(|s| !s.trim().is_empty()),
            "subject",
        );
        let message = payload.message.as_deref().map(str::trim).unwrap_or("");
        require(!message.is_empty(), "message");
        require(payload.kind.is_some(), "type");
        require(payload.original_id.is_some(), "originalId");

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        // Já validados acima
        let kind = payload
            .kind
            .ok_or_else(|| AppError::MissingFields(vec!["type".into()]))?;
        let id = payload
            .original_id
            .ok_or_else(|| AppError::MissingFields(vec!["originalId".into()]))?;

        match kind {
            LeadKind::Quote => {
                // Busca antes de enviar: responder a um lead inexistente é 404
                let quote = self
                    .quotes
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::NotFound("Quote"))?;

                let customer_name = payload
                    .customer_name
                    .clone()
                    .unwrap_or_else(|| quote.full_name());
                let service_type = payload
                    .service_type
                    .clone()
                    .unwrap_or_else(|| quote.service_type().to_string());

                self.email
                    .send_quote_reply(to, &customer_name, &service_type, message)
                    .await
                    .map_err(|e| AppError::EmailDispatch(e.to_string()))?;

                self.quotes.update_status(id, LeadStatus::Contacted).await?;
            }
            LeadKind::Contact => {
                let contact = self
                    .contacts
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::NotFound("Contact"))?;

                let customer_name = payload
                    .customer_name
                    .clone()
                    .unwrap_or_else(|| contact.name.clone());
                let original_subject = payload
                    .original_subject
                    .clone()
                    .unwrap_or_else(|| contact.subject.clone());

                self.email
                    .send_contact_reply(to, &customer_name, &original_subject, message)
                    .await
                    .map_err(|e| AppError::EmailDispatch(e.to_string()))?;

                self.contacts
                    .update_status(id, LeadStatus::Contacted)
                    .await?;
            }
        }

        tracing::info!("✅ Resposta enviada para {to} (lead {id})");
        Ok(())
    }

    // Smoke-test da configuração do provedor, disparado pelo console.
    pub async fn send_test_email(&self, payload: TestEmailPayload) -> Result<String, AppError> {
        let to = payload
            .to
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::MissingFields(vec!["to".into()]))?;

        let subject = payload
            .subject
            .as_deref()
            .unwrap_or("AmeriTrust email configuration test");
        let content = payload
            .message
            .as_deref()
            .unwrap_or("If you are reading this, the email pipeline is working.");

        self.email
            .send_test(to, subject, content)
            .await
            .map_err(|e| AppError::EmailDispatch(e.to_string()))
    }
}
