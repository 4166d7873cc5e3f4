// src/handlers/testimonials.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::testimonial::{Testimonial, TestimonialPayload},
};

// GET /api/testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "Testimonials",
    responses((status = 200, body = Vec<Testimonial>))
)]
pub async fn list_testimonials(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.testimonial_store.list().await)
}

// POST /api/testimonials
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = "Testimonials",
    request_body = TestimonialPayload,
    responses(
        (status = 201, description = "Depoimento registrado com id e data do servidor"),
        (status = 400, description = "Campos ausentes/inválidos")
    )
)]
pub async fn submit_testimonial(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<TestimonialPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let testimonial = payload.into_record(Utc::now());
    app_state.testimonial_store.insert(testimonial.clone()).await;
    tracing::info!("✅ Novo depoimento {}", testimonial.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Testimonial added successfully",
            "testimonial": testimonial,
        })),
    ))
}
