//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod generation_service;

pub use generation_service::{DailyImageSelector, GenerationOutcome};
