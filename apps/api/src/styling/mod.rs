//! Styling feature: outfit suggestion generation and look feedback.

pub mod handlers;
pub mod prompts;
pub mod stylist;
