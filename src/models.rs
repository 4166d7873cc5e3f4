pub mod admin;
pub mod contact;
pub mod lead;
pub mod quote;
pub mod testimonial;
