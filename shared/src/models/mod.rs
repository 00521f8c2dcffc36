//! Domain models for the Crop Health Monitoring Platform
//!
//! The health evaluator, trend aggregator and crop view live here so that the
//! backend and the WASM bindings compute identical verdicts.

mod crop;
mod health;
mod observation;
mod trend;
mod view;
mod weather;

pub use crop::*;
pub use health::*;
pub use observation::*;
pub use trend::*;
pub use view::*;
pub use weather::*;
