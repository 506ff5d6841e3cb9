// src/models/mod.rs

//! Domain models for the bot application.

mod status;

// Re-export all public types
pub use status::ReviewStatus;
