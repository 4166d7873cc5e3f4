// src/models/testimonial.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Depoimento público. Append-only: não tem status nem atualização.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub rating: i32,
    pub review: String,
    pub service_type: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Jennifer Martinez")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Austin, TX")]
    pub location: String,

    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    #[schema(example = 5)]
    pub rating: i32,

    #[validate(length(min = 1, message = "required"))]
    pub review: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Auto Insurance")]
    pub service_type: String,
}

impl TestimonialPayload {
    // Id e data são sempre atribuídos pelo servidor.
    pub fn into_record(self, now: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id: Uuid::new_v4(),
            name: self.name,
            location: self.location,
            rating: self.rating,
            review: self.review,
            service_type: self.service_type,
            date: now,
        }
    }
}
