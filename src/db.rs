pub mod lead_store;
pub use lead_store::{LeadRecord, LeadRepository, MemoryLeadStore};
pub mod testimonial_store;
pub use testimonial_store::TestimonialStore;
