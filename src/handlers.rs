pub mod admin;
pub mod contact;
pub mod quote;
pub mod testimonials;
