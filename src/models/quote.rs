// src/models/quote.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::LeadRecord;
use crate::models::lead::{LeadStatus, ListFilter};

// --- GRUPOS CONDICIONAIS POR PRODUTO ---

// O `serviceType` é a tag; cada variante carrega exatamente os campos que
// aquele produto exige. O enum é "achatado" dentro do Quote, então o JSON
// continua plano como no formulário: {"serviceType":"auto","driverName":...}.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "serviceType", rename_all = "lowercase")]
pub enum QuoteDetails {
    #[serde(rename_all = "camelCase")]
    Auto {
        driver_name: String,
        driver_date_of_birth: String,
        driver_license_no: String,
        vehicle_year: String,
        vehicle_make: String,
        vehicle_model: String,
        address: String,
    },
    #[serde(rename_all = "camelCase")]
    Commercial {
        company_name: String,
        dot_number: String,
        state: String,
        owner_name: String,
        commercial_driver_name: String,
        commercial_driver_date_of_birth: String,
        commercial_driver_license_no: String,
        truck_year: String,
        truck_make: String,
        truck_model: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        mc_number: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        trailer_year: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        trailer_make: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        trailer_model: Option<String>,
    },
    Home,
    Business,
    Life,
    Health,
}

impl QuoteDetails {
    pub fn service_type(&self) -> &'static str {
        match self {
            QuoteDetails::Auto { .. } => "auto",
            QuoteDetails::Commercial { .. } => "commercial",
            QuoteDetails::Home => "home",
            QuoteDetails::Business => "business",
            QuoteDetails::Life => "life",
            QuoteDetails::Health => "health",
        }
    }
}

// --- O REGISTRO ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_insurer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub details: QuoteDetails,

    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn service_type(&self) -> &'static str {
        self.details.service_type()
    }

    pub fn matches(&self, filter: &ListFilter, now: DateTime<Utc>) -> bool {
        if let Some(status) = filter.status {
            if self.status != status {
                return false;
            }
        }
        if let Some(service) = filter.service_type.as_deref() {
            if !service.eq_ignore_ascii_case(self.service_type()) {
                return false;
            }
        }
        if let Some(cutoff) = filter.cutoff(now) {
            if self.created_at < cutoff {
                return false;
            }
        }
        if let Some(term) = filter.search_term() {
            let haystack = format!(
                "{} {} {}",
                self.full_name().to_lowercase(),
                self.email.to_lowercase(),
                self.service_type()
            );
            if !haystack.contains(&term) {
                return false;
            }
        }
        true
    }
}

impl LeadRecord for Quote {
    const KIND: &'static str = "Quote";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_status(&mut self, status: LeadStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = Some(at);
    }
}

// --- PAYLOAD DO FORMULÁRIO ---

// O formulário manda tudo plano e opcional; a validação condicional por
// produto acontece no QuoteService, que monta o QuoteDetails tipado.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    #[schema(example = "John")]
    pub first_name: Option<String>,
    #[schema(example = "Smith")]
    pub last_name: Option<String>,
    #[schema(example = "john.smith@email.com")]
    pub email: Option<String>,
    #[schema(example = "(555) 123-4567")]
    pub phone: Option<String>,
    #[schema(example = "auto")]
    pub service_type: Option<String>,

    pub current_insurer: Option<String>,
    pub message: Option<String>,

    // Grupo "auto"
    pub driver_name: Option<String>,
    pub driver_date_of_birth: Option<String>,
    pub driver_license_no: Option<String>,
    pub vehicle_year: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub address: Option<String>,

    // Grupo "commercial"
    pub company_name: Option<String>,
    pub dot_number: Option<String>,
    pub mc_number: Option<String>,
    pub state: Option<String>,
    pub owner_name: Option<String>,
    pub commercial_driver_name: Option<String>,
    pub commercial_driver_date_of_birth: Option<String>,
    pub commercial_driver_license_no: Option<String>,
    pub truck_year: Option<String>,
    pub truck_make: Option<String>,
    pub truck_model: Option<String>,
    pub trailer_year: Option<String>,
    pub trailer_make: Option<String>,
    pub trailer_model: Option<String>,
}
