//! Shared types and models for the Crop Health Monitoring Platform
//!
//! This crate holds the crop health evaluator, the trend aggregator and the
//! crop view builder, shared between the backend and the WASM bindings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
