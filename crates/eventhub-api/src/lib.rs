//! EventHub API - HTTP API definitions
//!
//! This crate provides:
//! - Wire models for the EventHub backend (events, internship slots, auth, admin)
//! - Query filter types that serialize to request query parameters
//! - Input validation utilities for pre-submit checks

pub mod model;
pub mod validation;

// Re-export commonly used types
pub use model::*;
pub use validation::*;
