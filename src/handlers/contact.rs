// src/handlers/contact.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::contact::{Contact, ContactPayload},
    models::lead::{ListFilter, UpdateStatusPayload},
};

// POST /api/contact
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Mensagem registrada"),
        (status = 400, description = "Campos ausentes/inválidos ou corpo malformado")
    )
)]
pub async fn submit_contact(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ContactPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.submit(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Message sent successfully",
            "id": contact.id,
        })),
    ))
}

// GET /api/contact
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "Contacts",
    params(
        ("search" = Option<String>, Query, description = "Busca livre por nome/e-mail/assunto"),
        ("status" = Option<String>, Query, description = "new | pending | contacted"),
        ("range" = Option<String>, Query, description = "today | 7d | 30d | 90d | all")
    ),
    responses(
        (status = 200, description = "Contatos do mais novo para o mais antigo", body = Vec<Contact>)
    )
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = app_state.contact_service.list(&filter).await?;
    Ok(Json(contacts))
}

// GET /api/contact/{id}
#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Id do contato")),
    responses(
        (status = 200, body = Contact),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn get_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.find(id).await?;
    Ok(Json(contact))
}

// PATCH /api/contact
#[utoipa::path(
    patch,
    path = "/api/contact",
    tag = "Contacts",
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status atualizado, registro retornado"),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn update_contact_status(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateStatusPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state
        .contact_service
        .update_status(payload.id, payload.status)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Contact status updated successfully",
        "contact": contact,
    })))
}

// DELETE /api/contact/{id}
#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "Id do contato")),
    responses(
        (status = 200, description = "Removido; a operação não é reversível"),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn delete_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Contact deleted successfully",
        "deletedId": id,
    })))
}
