pub mod admin_service;
pub mod auth;
pub mod contact_service;
pub mod email_service;
pub mod email_templates;
pub mod quote_service;
