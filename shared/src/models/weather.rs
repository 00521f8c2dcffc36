//! Weather advisory models

use serde::{Deserialize, Serialize};

/// Current conditions for a named location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    /// °C
    pub temperature: f64,
    /// Relative humidity, 0-100
    pub humidity: f64,
    pub description: String,
    pub icon: String,
    pub city: String,
    pub country: String,
}
