// src/db/testimonial_store.rs

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::testimonial::Testimonial;

// Depoimentos são append-only e o site mostra os aprovados desde o
// lançamento, então o armazém já nasce com o conteúdo editorial.
pub struct TestimonialStore {
    records: RwLock<Vec<Testimonial>>,
}

impl TestimonialStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(seed_testimonials()),
        }
    }

    pub async fn insert(&self, testimonial: Testimonial) {
        self.records.write().await.push(testimonial);
    }

    pub async fn list(&self) -> Vec<Testimonial> {
        self.records.read().await.clone()
    }
}

impl Default for TestimonialStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("data de seed válida")
}

fn seed(
    name: &str,
    location: &str,
    review: &str,
    service_type: &str,
    date: DateTime<Utc>,
) -> Testimonial {
    Testimonial {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: location.to_string(),
        rating: 5,
        review: review.to_string(),
        service_type: service_type.to_string(),
        date,
    }
}

fn seed_testimonials() -> Vec<Testimonial> {
    vec![
        seed(
            "Jennifer Martinez",
            "Austin, TX",
            "AmeriTrust made switching my auto insurance so easy! I saved over $800 a year and got better coverage. Their customer service is outstanding.",
            "Auto Insurance",
            seed_date(2024, 1, 15),
        ),
        seed(
            "Robert Chen",
            "San Francisco, CA",
            "As a small business owner, finding the right commercial insurance was crucial. AmeriTrust provided exactly what I needed at a great price.",
            "Commercial Insurance",
            seed_date(2024, 1, 10),
        ),
        seed(
            "Sarah Williams",
            "Miami, FL",
            "After my house was damaged in a storm, AmeriTrust handled everything perfectly. The claims process was smooth and stress-free.",
            "Home Insurance",
            seed_date(2024, 1, 5),
        ),
        seed(
            "Michael Thompson",
            "Chicago, IL",
            "The team at AmeriTrust is incredibly knowledgeable and helpful. They took the time to explain all my options and found me the perfect policy.",
            "Life Insurance",
            seed_date(2023, 12, 28),
        ),
        seed(
            "Lisa Anderson",
            "Denver, CO",
            "I've been with AmeriTrust for 5 years now. Their rates are competitive and their service is unmatched. Highly recommend!",
            "Auto Insurance",
            seed_date(2023, 12, 20),
        ),
        seed(
            "David Rodriguez",
            "Phoenix, AZ",
            "Getting a quote was incredibly fast - same day as promised! The whole process was transparent and professional.",
            "Business Insurance",
            seed_date(2023, 12, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nasce_com_seed_e_aceita_novos() {
        let store = TestimonialStore::new();
        let before = store.list().await.len();
        assert_eq!(before, 6);

        store
            .insert(seed(
                "Novo Cliente",
                "Atlanta, GA",
                "Great service.",
                "Home Insurance",
                Utc::now(),
            ))
            .await;
        assert_eq!(store.list().await.len(), before + 1);
    }
}
