//! HTTP handlers for the Crop Health Monitoring Platform

pub mod analysis;
pub mod crop;
pub mod dashboard;
pub mod health;
pub mod observation;
pub mod weather;

pub use analysis::*;
pub use crop::*;
pub use dashboard::*;
pub use health::*;
pub use observation::*;
pub use weather::*;
