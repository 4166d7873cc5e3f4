// src/services/quote_service.rs

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::lead::{email_looks_valid, LeadStatus, ListFilter},
    models::quote::{Quote, QuoteDetails, QuotePayload},
    services::email_service::{Delivery, EmailService, EmailStatus},
};

// Campo obrigatório: em branco ou ausente entra na lista de faltantes.
fn required(value: &Option<String>, field: &str, missing: &mut Vec<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field.to_string());
            String::new()
        }
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// Valida o payload plano do formulário e monta o registro tipado.
// Coleta TODOS os campos faltantes (base + grupo condicional) antes de
// falhar, para o formulário mostrar a lista completa de uma vez.
pub fn build_quote(payload: QuotePayload, now: DateTime<Utc>) -> Result<Quote, AppError> {
    let mut missing = Vec::new();

    let first_name = required(&payload.first_name, "firstName", &mut missing);
    let last_name = required(&payload.last_name, "lastName", &mut missing);
    let email = required(&payload.email, "email", &mut missing);
    let phone = required(&payload.phone, "phone", &mut missing);
    let service_type = required(&payload.service_type, "serviceType", &mut missing);

    let details = match service_type.as_str() {
        "" => None,
        "auto" => Some(QuoteDetails::Auto {
            driver_name: required(&payload.driver_name, "driverName", &mut missing),
            driver_date_of_birth: required(
                &payload.driver_date_of_birth,
                "driverDateOfBirth",
                &mut missing,
            ),
            driver_license_no: required(&payload.driver_license_no, "driverLicenseNo", &mut missing),
            vehicle_year: required(&payload.vehicle_year, "vehicleYear", &mut missing),
            vehicle_make: required(&payload.vehicle_make, "vehicleMake", &mut missing),
            vehicle_model: required(&payload.vehicle_model, "vehicleModel", &mut missing),
            address: required(&payload.address, "address", &mut missing),
        }),
        "commercial" => Some(QuoteDetails::Commercial {
            company_name: required(&payload.company_name, "companyName", &mut missing),
            dot_number: required(&payload.dot_number, "dotNumber", &mut missing),
            state: required(&payload.state, "state", &mut missing),
            owner_name: required(&payload.owner_name, "ownerName", &mut missing),
            commercial_driver_name: required(
                &payload.commercial_driver_name,
                "commercialDriverName",
                &mut missing,
            ),
            commercial_driver_date_of_birth: required(
                &payload.commercial_driver_date_of_birth,
                "commercialDriverDateOfBirth",
                &mut missing,
            ),
            commercial_driver_license_no: required(
                &payload.commercial_driver_license_no,
                "commercialDriverLicenseNo",
                &mut missing,
            ),
            truck_year: required(&payload.truck_year, "truckYear", &mut missing),
            truck_make: required(&payload.truck_make, "truckMake", &mut missing),
            truck_model: required(&payload.truck_model, "truckModel", &mut missing),
            mc_number: optional(&payload.mc_number),
            trailer_year: optional(&payload.trailer_year),
            trailer_make: optional(&payload.trailer_make),
            trailer_model: optional(&payload.trailer_model),
        }),
        "home" => Some(QuoteDetails::Home),
        "business" => Some(QuoteDetails::Business),
        "life" => Some(QuoteDetails::Life),
        "health" => Some(QuoteDetails::Health),
        other => {
            return Err(AppError::invalid_field(
                "serviceType",
                &format!("unknown service type: {other}"),
            ));
        }
    };

    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }
    if !email_looks_valid(&email) {
        return Err(AppError::InvalidEmail);
    }

    // `details` só é None se serviceType faltou, já tratado acima
    let details = details.ok_or_else(|| AppError::MissingFields(vec!["serviceType".into()]))?;

    Ok(Quote {
        id: Uuid::new_v4(),
        first_name,
        last_name,
        email,
        phone,
        current_insurer: optional(&payload.current_insurer),
        message: optional(&payload.message),
        details,
        status: LeadStatus::New,
        created_at: now,
        updated_at: None,
    })
}

#[derive(Clone)]
pub struct QuoteService {
    store: Arc<dyn LeadRepository<Quote>>,
    email: EmailService,
}

impl QuoteService {
    pub fn new(store: Arc<dyn LeadRepository<Quote>>, email: EmailService) -> Self {
        Self { store, email }
    }

    // Validação -> gravação -> notificações. O e-mail é melhor-esforço:
    // falha vira warning e status secundário, nunca erro da submissão.
    pub async fn submit(&self, payload: QuotePayload) -> Result<(Quote, EmailStatus), AppError> {
        let quote = build_quote(payload, Utc::now())?;
        self.store.insert(quote.clone()).await?;
        tracing::info!("✅ Novo orçamento {} ({})", quote.id, quote.service_type());

        let delivery = self.email.notify_new_quote(&quote).await;
        match &delivery {
            Delivery::Delivered { message_id, recipients } => {
                tracing::info!("✅ Alerta enviado a {recipients} admins, message_id={message_id}");
            }
            Delivery::Degraded { warning } => {
                tracing::warn!("⚠️ Alerta de orçamento degradado: {warning}");
            }
            Delivery::Unavailable { error } => {
                tracing::warn!("⚠️ Serviço de e-mail indisponível: {error}");
            }
        }

        // Confirmação ao cliente, também melhor-esforço
        if let Err(err) = self.email.send_quote_confirmation(&quote).await {
            tracing::warn!("⚠️ Confirmação ao cliente não enviada: {err}");
        }

        Ok((quote, EmailStatus::from(&delivery)))
    }

    pub async fn list(&self, filter: &ListFilter) -> Result<Vec<Quote>, AppError> {
        let now = Utc::now();
        let all = self.store.list().await?;
        Ok(all.into_iter().filter(|q| q.matches(filter, now)).collect())
    }

    pub async fn find(&self, id: Uuid) -> Result<Quote, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Quote"))
    }

    pub async fn update_status(&self, id: Uuid, status: LeadStatus) -> Result<Quote, AppError> {
        let quote = self.store.update_status(id, status).await?;
        tracing::info!("Status do orçamento {} -> {}", id, status.as_str());
        Ok(quote)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto_payload() -> QuotePayload {
        QuotePayload {
            first_name: Some("John".into()),
            last_name: Some("Smith".into()),
            email: Some("john.smith@email.com".into()),
            phone: Some("(555) 123-4567".into()),
            service_type: Some("auto".into()),
            driver_name: Some("John Smith".into()),
            driver_date_of_birth: Some("1985-04-12".into()),
            driver_license_no: Some("D1234567".into()),
            vehicle_year: Some("2020".into()),
            vehicle_make: Some("Toyota".into()),
            vehicle_model: Some("Camry".into()),
            address: Some("123 Main St".into()),
            ..QuotePayload::default()
        }
    }

    #[test]
    fn monta_quote_auto_completo() {
        let quote = build_quote(auto_payload(), Utc::now()).unwrap();
        assert_eq!(quote.service_type(), "auto");
        assert_eq!(quote.status, LeadStatus::New);
        assert!(quote.updated_at.is_none());
    }

    #[test]
    fn campo_do_grupo_auto_faltando_entra_na_lista() {
        let mut payload = auto_payload();
        payload.driver_license_no = None;
        payload.vehicle_year = Some("   ".into()); // em branco conta como ausente

        let err = build_quote(payload, Utc::now()).unwrap_err();
        match err {
            AppError::MissingFields(fields) => {
                assert!(fields.contains(&"driverLicenseNo".to_string()));
                assert!(fields.contains(&"vehicleYear".to_string()));
            }
            other => panic!("esperava MissingFields, veio {other:?}"),
        }
    }

    #[test]
    fn produto_sem_grupo_nao_exige_campos_extras() {
        let mut payload = auto_payload();
        payload.service_type = Some("life".into());
        payload.driver_name = None;
        payload.driver_license_no = None;

        let quote = build_quote(payload, Utc::now()).unwrap();
        assert_eq!(quote.service_type(), "life");
    }

    #[test]
    fn service_type_desconhecido_e_rejeitado() {
        let mut payload = auto_payload();
        payload.service_type = Some("boat".into());
        let err = build_quote(payload, Utc::now()).unwrap_err();
        match err {
            AppError::ValidationError(errors) => {
                // O erro aponta o campo culpado pelo nome da wire
                assert!(errors.field_errors().contains_key("serviceType"));
            }
            other => panic!("esperava ValidationError, veio {other:?}"),
        }
    }

    #[test]
    fn email_sem_tld_e_rejeitado() {
        let mut payload = auto_payload();
        payload.email = Some("john@smith".into());
        let err = build_quote(payload, Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail));
    }
}
