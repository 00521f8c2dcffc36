//! Domain models for the Crop Health Monitoring Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
