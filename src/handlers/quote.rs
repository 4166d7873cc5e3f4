// src/handlers/quote.rs

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
    models::lead::{ListFilter, UpdateStatusPayload},
    models::quote::{Quote, QuotePayload},
};

// POST /api/quote
#[utoipa::path(
    post,
    path = "/api/quote",
    tag = "Quotes",
    request_body = QuotePayload,
    responses(
        (status = 201, description = "Orçamento registrado, com id de referência e status do e-mail"),
        (status = 400, description = "Campos ausentes/inválidos ou corpo malformado")
    )
)]
pub async fn submit_quote(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<QuotePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (quote, email_status) = app_state.quote_service.submit(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Your quote request has been submitted successfully. Our team will review your information and contact you within 24 hours with a personalized quote.",
            "id": quote.id,
            "emailStatus": email_status,
            "nextSteps": [
                "Our expert team will review your information",
                "We'll prepare a customized quote based on your needs",
                "You'll receive a call within 24 hours to discuss your options",
                "We'll provide you with competitive rates and coverage details",
            ],
        })),
    ))
}

// GET /api/quote
#[utoipa::path(
    get,
    path = "/api/quote",
    tag = "Quotes",
    params(
        ("search" = Option<String>, Query, description = "Busca livre por nome/e-mail/serviço"),
        ("status" = Option<String>, Query, description = "new | pending | contacted"),
        ("serviceType" = Option<String>, Query, description = "auto | home | business | commercial | life | health"),
        ("range" = Option<String>, Query, description = "today | 7d | 30d | 90d | all")
    ),
    responses(
        (status = 200, description = "Orçamentos do mais novo para o mais antigo", body = Vec<Quote>)
    )
)]
pub async fn list_quotes(
    State(app_state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<impl IntoResponse, AppError> {
    let quotes = app_state.quote_service.list(&filter).await?;
    Ok(Json(quotes))
}

// GET /api/quote/{id}
#[utoipa::path(
    get,
    path = "/api/quote/{id}",
    tag = "Quotes",
    params(("id" = Uuid, Path, description = "Id do orçamento")),
    responses(
        (status = 200, body = Quote),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn get_quote(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let quote = app_state.quote_service.find(id).await?;
    Ok(Json(quote))
}

// PATCH /api/quote
#[utoipa::path(
    patch,
    path = "/api/quote",
    tag = "Quotes",
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status atualizado, registro retornado"),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn update_quote_status(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateStatusPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let quote = app_state
        .quote_service
        .update_status(payload.id, payload.status)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Quote status updated successfully",
        "quote": quote,
    })))
}

// DELETE /api/quote/{id}
#[utoipa::path(
    delete,
    path = "/api/quote/{id}",
    tag = "Quotes",
    params(("id" = Uuid, Path, description = "Id do orçamento")),
    responses(
        (status = 200, description = "Removido; a operação não é reversível"),
        (status = 404, description = "Id ausente do armazém")
    )
)]
pub async fn delete_quote(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.quote_service.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Quote deleted successfully",
        "deletedId": id,
    })))
}
