// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Quotes ---
        handlers::quote::submit_quote,
        handlers::quote::list_quotes,
        handlers::quote::get_quote,
        handlers::quote::update_quote_status,
        handlers::quote::delete_quote,

        // --- Contacts ---
        handlers::contact::submit_contact,
        handlers::contact::list_contacts,
        handlers::contact::get_contact,
        handlers::contact::update_contact_status,
        handlers::contact::delete_contact,

        // --- Testimonials ---
        handlers::testimonials::list_testimonials,
        handlers::testimonials::submit_testimonial,

        // --- Admin ---
        handlers::admin::login,
        handlers::admin::reply,
        handlers::admin::test_email,
    ),
    components(
        schemas(
            // --- Leads ---
            models::lead::LeadStatus,
            models::lead::UpdateStatusPayload,
            models::lead::DateRange,
            models::lead::ListFilter,

            // --- Quotes ---
            models::quote::QuoteDetails,
            models::quote::Quote,
            models::quote::QuotePayload,

            // --- Contacts ---
            models::contact::Contact,
            models::contact::ContactPayload,

            // --- Testimonials ---
            models::testimonial::Testimonial,
            models::testimonial::TestimonialPayload,

            // --- Admin ---
            models::admin::AdminUser,
            models::admin::LoginPayload,
            models::admin::LoginResponse,
            models::admin::LeadKind,
            models::admin::ReplyPayload,
            models::admin::TestEmailPayload,

            // --- Email ---
            services::email_service::EmailStatus,
        )
    ),
    tags(
        (name = "Quotes", description = "Entrada e triagem de pedidos de orçamento"),
        (name = "Contacts", description = "Mensagens do formulário de contato"),
        (name = "Testimonials", description = "Depoimentos públicos de clientes"),
        (name = "Admin", description = "Sessão e operações do console de triagem")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
