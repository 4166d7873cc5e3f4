// src/services/email_templates.rs
//
// Templates HTML das mensagens transacionais. Conteúdo e identidade visual
// vêm do site público; aqui só montamos strings, nada de rede.

use crate::models::quote::{Quote, QuoteDetails};

const AGENCY_NAME: &str = "AmeriTrust Insurance Group";
const AGENCY_PHONE: &str = "(678) 217-5044";
const AGENCY_EMAIL: &str = "ameritrustins@gmail.com";
const AGENCY_ADDRESS: &str = "2198 Austell Rd SW #104, Marietta, GA 30008";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn nl2br(s: &str) -> String {
    s.replace('\n', "<br>")
}

// Moldura comum: cabeçalho verde, conteúdo, rodapé com os contatos.
fn shell(heading: &str, inner: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; background-color: #f5f5f5;">
  <div style="max-width: 600px; margin: 0 auto; background: #ffffff;">
    <div style="background: linear-gradient(135deg, #16a34a, #059669); color: white; padding: 30px 20px; text-align: center;">
      <h1 style="margin: 0; font-size: 24px;">{heading}</h1>
      <p style="margin: 10px 0 0 0; opacity: 0.9; font-size: 18px;">{AGENCY_NAME}</p>
    </div>
    <div style="padding: 20px;">
{inner}
    </div>
    <div style="background: #f3f4f6; padding: 20px; text-align: center; color: #6b7280; font-size: 14px;">
      <p style="margin: 5px 0;"><strong>{AGENCY_NAME}</strong></p>
      <p style="margin: 5px 0;">&#128222; {AGENCY_PHONE} | &#128231; {AGENCY_EMAIL}</p>
      <p style="margin: 5px 0;">&#128205; {AGENCY_ADDRESS}</p>
    </div>
  </div>
</body>
</html>"#
    )
}

fn card(title: &str, inner: &str) -> String {
    format!(
        r#"<div style="background: white; padding: 20px; border-radius: 8px; margin: 15px 0; border: 1px solid #e5e7eb;">
  <h3 style="color: #16a34a; margin-top: 0;">{title}</h3>
{inner}
</div>"#
    )
}

fn row(label: &str, value: &str) -> String {
    format!(r#"  <p style="margin: 5px 0;"><strong>{label}:</strong> {value}</p>"#)
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

// Seção condicional do digest do admin: só os produtos com field-group
// próprio geram bloco extra; os demais ficam sem seção.
fn details_section(details: &QuoteDetails) -> String {
    match details {
        QuoteDetails::Auto {
            driver_name,
            driver_date_of_birth,
            driver_license_no,
            vehicle_year,
            vehicle_make,
            vehicle_model,
            address,
        } => card(
            "&#128663; Auto Insurance Details",
            &[
                row("Driver Name", driver_name),
                row("Date of Birth", driver_date_of_birth),
                row("License Number", driver_license_no),
                row(
                    "Vehicle",
                    &format!("{vehicle_year} {vehicle_make} {vehicle_model}"),
                ),
                row("Address", address),
            ]
            .join("\n"),
        ),
        QuoteDetails::Commercial {
            company_name,
            dot_number,
            state,
            owner_name,
            commercial_driver_name,
            commercial_driver_date_of_birth,
            commercial_driver_license_no,
            truck_year,
            truck_make,
            truck_model,
            mc_number,
            trailer_year,
            trailer_make,
            trailer_model,
        } => card(
            "&#128667; Commercial Trucking Details",
            &[
                row("Company Name", company_name),
                row("DOT Number", dot_number),
                row("MC Number", opt(mc_number)),
                row("State", state),
                row("Owner Name", owner_name),
                row("Driver Name", commercial_driver_name),
                row("Driver Date of Birth", commercial_driver_date_of_birth),
                row("Driver License Number", commercial_driver_license_no),
                row("Truck", &format!("{truck_year} {truck_make} {truck_model}")),
                row(
                    "Trailer",
                    &format!(
                        "{} {} {}",
                        opt(trailer_year),
                        opt(trailer_make),
                        opt(trailer_model)
                    ),
                ),
            ]
            .join("\n"),
        ),
        _ => String::new(),
    }
}

// Digest do novo orçamento para a equipe. Versão canônica: o site tinha
// dois builders quase iguais, este segue o mais completo.
pub fn admin_quote_alert(quote: &Quote) -> (String, String) {
    let service = quote.service_type();
    let subject = format!(
        "\u{1F6A8} URGENT: New {} Insurance Quote - AMT-{} - {}",
        service.to_uppercase(),
        quote.id,
        quote.full_name()
    );

    let summary = card(
        "&#128203; Quote Summary",
        &[
            row("Reference ID", &format!("AMT-{}", quote.id)),
            row(
                "Submitted",
                &quote.created_at.format("%A, %B %-d, %Y %H:%M UTC").to_string(),
            ),
            row(
                "Insurance Type",
                &format!("{} Insurance", capitalize(service)),
            ),
        ]
        .join("\n"),
    );

    let customer = card(
        "&#128100; Customer Contact Information",
        &[
            row("Full Name", &quote.full_name()),
            row(
                "Email",
                &format!(
                    r#"<a href="mailto:{0}" style="color: #16a34a;">{0}</a>"#,
                    quote.email
                ),
            ),
            row("Phone", &quote.phone),
            row(
                "Current Insurer",
                quote
                    .current_insurer
                    .as_deref()
                    .unwrap_or("<em>Not specified</em>"),
            ),
        ]
        .join("\n"),
    );

    let message = match quote.message.as_deref() {
        Some(text) if !text.is_empty() => card(
            "&#128172; Customer Message",
            &format!(r#"  <p style="font-style: italic;">"{}"</p>"#, nl2br(text)),
        ),
        _ => String::new(),
    };

    let alert = format!(
        r#"<div style="background: #fef3c7; border: 1px solid #f59e0b; padding: 15px; border-radius: 6px; margin-bottom: 20px;">
  <strong>&#9889; URGENT ACTION REQUIRED:</strong> New {} insurance quote request submitted and requires immediate attention. Contact the customer within 2 hours.
</div>"#,
        capitalize(service)
    );

    let inner = format!(
        "{alert}\n{summary}\n{customer}\n{}\n{message}",
        details_section(&quote.details)
    );
    (subject, shell("\u{1F6E1} NEW QUOTE REQUEST", &inner))
}

// Confirmação de recebimento para o cliente.
pub fn quote_confirmation(quote: &Quote, base_url: &str) -> (String, String) {
    let service = capitalize(quote.service_type());
    let subject = format!("Quote Request Received - {service} Insurance");

    let inner = format!(
        r#"<p>Dear {first_name},</p>
<p>Thank you for your interest in {AGENCY_NAME}! We have successfully received your quote request for <strong>{service} insurance</strong> (reference <strong>AMT-{id}</strong>).</p>
{next}
<p>If you have any immediate questions, please call us at {AGENCY_PHONE}. We're here to help!</p>
<p>You can learn more about our coverage options at <a href="{base_url}/services" style="color: #16a34a;">{base_url}/services</a>.</p>
<p>Best regards,<br>{AGENCY_NAME} Team</p>"#,
        first_name = quote.first_name,
        id = quote.id,
        next = card(
            "What happens next",
            r#"  <ul style="margin: 10px 0; padding-left: 20px;">
    <li>Our team will review your request within 2 business hours</li>
    <li>We'll prepare a customized quote based on your specific needs</li>
    <li>You'll receive your quote via email or phone within 24 hours</li>
    <li>No loss runs needed - we make the process simple!</li>
  </ul>"#,
        ),
    );
    (subject, shell("Quote Request Received", &inner))
}

// Resposta do console do admin a um pedido de orçamento.
pub fn quote_reply(customer_name: &str, service_type: &str, message: &str) -> (String, String) {
    let subject = format!("Re: Your {service_type} Insurance Quote - AmeriTrust Insurance");
    let inner = format!(
        r#"<p>Dear {customer_name},</p>
<p>Thank you for your interest in our {service_type} insurance services.</p>
<div style="background: #f9fafb; padding: 15px; border-radius: 6px; border-left: 4px solid #16a34a; margin: 20px 0;">
{body}
</div>
<p>If you have any questions, please don't hesitate to contact us.</p>
<p>Best regards,<br>{AGENCY_NAME} Team</p>"#,
        body = nl2br(message),
    );
    (subject, shell(AGENCY_NAME, &inner))
}

// Resposta do console a uma mensagem de contato geral.
pub fn contact_reply(customer_name: &str, original_subject: &str, message: &str) -> (String, String) {
    let subject = format!("Re: {original_subject} - AmeriTrust Insurance");
    let inner = format!(
        r#"<p>Dear {customer_name},</p>
<p>Thank you for contacting {AGENCY_NAME}.</p>
<div style="background: #f9fafb; padding: 15px; border-radius: 6px; border-left: 4px solid #16a34a; margin: 20px 0;">
{body}
</div>
<p>If you have any additional questions, please don't hesitate to reach out.</p>
<p>Best regards,<br>{AGENCY_NAME} Team</p>"#,
        body = nl2br(message),
    );
    (subject, shell(AGENCY_NAME, &inner))
}

// Mensagem crua para o smoke-test do provedor.
pub fn test_message(content: &str) -> String {
    shell(
        "Email Configuration Test",
        &format!(
            r#"<p>This is a test message from the quote management system.</p>
<div style="background: #f9fafb; padding: 15px; border-radius: 6px; margin: 20px 0;">
{}
</div>"#,
            nl2br(content)
        ),
    )
}
