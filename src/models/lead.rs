// src/models/lead.rs

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- STATUS ---

// Ciclo de vida de um lead. Transições são manuais e sem ordem fixa;
// a única automática é `* -> Contacted` após uma resposta enviada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Pending,
    Contacted,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Pending => "pending",
            LeadStatus::Contacted => "contacted",
        }
    }
}

// --- PAYLOADS COMPARTILHADOS ---

// Corpo do PATCH /api/quote e /api/contact.
// Campos não-opcionais: ausência vira rejeição de payload (400).
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "pending")]
    pub status: LeadStatus,
}

// --- FILTROS DO CONSOLE ADMIN ---

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub enum DateRange {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl DateRange {
    // Instante mínimo de `createdAt` para o registro entrar na listagem.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::All => None,
            DateRange::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|start| start.and_utc()),
            DateRange::Last7Days => Some(now - Duration::days(7)),
            DateRange::Last30Days => Some(now - Duration::days(30)),
            DateRange::Last90Days => Some(now - Duration::days(90)),
        }
    }
}

// Query string dos GET de listagem. Tudo opcional: sem filtros = tudo.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    // Busca livre sobre nome / e-mail / assunto / tipo de serviço
    pub search: Option<String>,
    pub status: Option<LeadStatus>,
    pub service_type: Option<String>,
    pub range: Option<DateRange>,
}

impl ListFilter {
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.range.unwrap_or_default().cutoff(now)
    }

    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

// --- VALIDAÇÃO DE E-MAIL ---

// Forma mínima `local@dominio.tld`, igual ao regex do site original.
// O `validator` aceita `a@b` (regra HTML5); aqui exigimos o ponto no domínio.
pub fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_email_com_dominio_completo() {
        assert!(email_looks_valid("john.smith@email.com"));
        assert!(email_looks_valid("a+b@sub.dominio.org"));
    }

    #[test]
    fn rejeita_formas_incompletas() {
        assert!(!email_looks_valid("sem-arroba.com"));
        assert!(!email_looks_valid("user@dominio"));
        assert!(!email_looks_valid("@dominio.com"));
        assert!(!email_looks_valid("user@.com"));
        assert!(!email_looks_valid("user@dominio."));
        assert!(!email_looks_valid("user name@dominio.com"));
        assert!(!email_looks_valid("a@b@c.com"));
    }

    #[test]
    fn cutoff_do_range_all_e_aberto() {
        let now = Utc::now();
        assert!(DateRange::All.cutoff(now).is_none());
        let week = DateRange::Last7Days.cutoff(now).unwrap();
        assert_eq!(now - week, Duration::days(7));
    }
}
