// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::LeadRecord;
use crate::models::lead::{LeadStatus, ListFilter};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,

    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,

    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn matches(&self, filter: &ListFilter, now: DateTime<Utc>) -> bool {
        if let Some(status) = filter.status {
            if self.status != status {
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
                self.name.to_lowercase(),
                self.email.to_lowercase(),
                self.subject.to_lowercase()
            );
            if !haystack.contains(&term) {
                return false;
            }
        }
        true
    }
}

impl LeadRecord for Contact {
    const KIND: &'static str = "Contact";

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

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[schema(example = "Michael Brown")]
    pub name: Option<String>,
    #[schema(example = "michael.brown@email.com")]
    pub email: Option<String>,
    #[schema(example = "(555) 456-7890")]
    pub phone: Option<String>,
    #[schema(example = "Question about commercial insurance")]
    pub subject: Option<String>,
    pub message: Option<String>,
}
