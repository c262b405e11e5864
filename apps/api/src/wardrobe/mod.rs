//! Wardrobe feature: image classification and catalog endpoints.

pub mod classifier;
pub mod handlers;
pub mod prompts;
