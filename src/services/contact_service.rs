// src/services/contact_service.rs

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::contact::{Contact, ContactPayload},
    models::lead::{email_looks_valid, LeadStatus, ListFilter},
};

fn required(value: &Option<String>, field: &str, missing: &mut Vec<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field.to_string());
            String::new()
        }
    }
}

pub fn build_contact(payload: ContactPayload, now: DateTime<Utc>) -> Result<Contact, AppError> {
    let mut missing = Vec::new();

    let name = required(&payload.name, "name", &mut missing);
    let email = required(&payload.email, "email", &mut missing);
    let subject = required(&payload.subject, "subject", &mut missing);
    let message = required(&payload.message, "message", &mut missing);

    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }
    if !email_looks_valid(&email) {
        return Err(AppError::InvalidEmail);
    }

    Ok(Contact {
        id: Uuid::new_v4(),
        name,
        email,
        phone: payload
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        subject,
        message,
        status: LeadStatus::New,
        created_at: now,
        updated_at: None,
    })
}

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn LeadRepository<Contact>>,
}

impl ContactService {
    pub fn new(store: Arc<dyn LeadRepository<Contact>>) -> Self {
        Self { store }
    }

    // Diferente do orçamento, o caminho de contato NÃO dispara alerta
    // por e-mail à equipe. Assimetria herdada do produto, de propósito;
    // o console do admin é quem fura a fila de contatos.
    pub async fn submit(&self, payload: ContactPayload) -> Result<Contact, AppError> {
        let contact = build_contact(payload, Utc::now())?;
        self.store.insert(contact.clone()).await?;
        tracing::info!("✅ Novo contato {}", contact.id);
        Ok(contact)
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Contact>, AppError> {
        let now = Utc::now();
        let all = self.store.list().await?;
        Ok(all.into_iter().filter(|c| c.matches(filter, now)).collect())
    }

    pub async fn find(&self, id: Uuid) -> Result<Contact, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Contact"))
    }

    pub async fn update_status(&self, id: Uuid, status: LeadStatus) -> Result<Contact, AppError> {
        let contact = self.store.update_status(id, status).await?;
        tracing::info!("Status do contato {} -> {}", id, status.as_str());
        Ok(contact)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: Some("Michael Brown".into()),
            email: Some("michael.brown@email.com".into()),
            phone: Some("(555) 456-7890".into()),
            subject: Some("Question about commercial insurance".into()),
            message: Some("I need information about coverage options.".into()),
        }
    }

    #[test]
    fn monta_contato_valido() {
        let contact = build_contact(payload(), Utc::now()).unwrap();
        assert_eq!(contact.status, LeadStatus::New);
        assert_eq!(contact.phone.as_deref(), Some("(555) 456-7890"));
    }

    #[test]
    fn telefone_e_opcional() {
        let mut p = payload();
        p.phone = None;
        let contact = build_contact(p, Utc::now()).unwrap();
        assert!(contact.phone.is_none());
    }

    #[test]
    fn quatro_campos_sao_obrigatorios() {
        let mut p = payload();
        p.subject = None;
        p.message = Some("".into());
        let err = build_contact(p, Utc::now()).unwrap_err();
        match err {
            AppError::MissingFields(fields) => {
                assert_eq!(fields, vec!["subject".to_string(), "message".to_string()]);
            }
            other => panic!("esperava MissingFields, veio {other:?}"),
        }
    }
}
