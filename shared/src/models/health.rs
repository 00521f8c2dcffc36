//! Crop health evaluation
//!
//! A verdict is derived from a single set of readings by walking an ordered
//! rule list and stopping at the first rule that matches. Soil moisture
//! deficiency is checked first and short-circuits every other rule, so the
//! order of [`RULE_ORDER`] is part of the verdict's meaning.

use serde::{Deserialize, Serialize};

/// Soil moisture (%) below which a crop is in poor health
pub const CRITICAL_SOIL_MOISTURE: f64 = 35.0;
/// Soil moisture (%) below which irrigation should be scheduled
pub const ADEQUATE_SOIL_MOISTURE: f64 = 50.0;
/// Temperature (°C) above which heat stress is likely
pub const HEAT_STRESS_TEMPERATURE: f64 = 38.0;
/// Relative humidity (%) below which the air is considered too dry
pub const LOW_HUMIDITY: f64 = 30.0;
/// Temperature (°C) below which cold stress is likely
pub const COLD_STRESS_TEMPERATURE: f64 = 15.0;

/// Environmental readings a verdict is computed from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Volumetric soil moisture in %
    pub soil_moisture: f64,
}

impl HealthMetrics {
    pub fn new(temperature: f64, humidity: f64, soil_moisture: f64) -> Self {
        Self {
            temperature,
            humidity,
            soil_moisture,
        }
    }
}

/// Categorical health judgment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Good,
    Moderate,
    Poor,
}

impl HealthStatus {
    /// UI severity tag mirroring the status
    pub fn severity(&self) -> Severity {
        match self {
            HealthStatus::Good => Severity::Success,
            HealthStatus::Moderate => Severity::Warning,
            HealthStatus::Poor => Severity::Destructive,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Good => write!(f, "Good"),
            HealthStatus::Moderate => write!(f, "Moderate"),
            HealthStatus::Poor => write!(f, "Poor"),
        }
    }
}

/// UI-facing severity tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Destructive,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Destructive => write!(f, "destructive"),
        }
    }
}

/// Health rules, each identifying the condition that produced a verdict
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthRule {
    LowSoilMoisture,
    AdverseClimate,
    ImprovableMoisture,
    ColdStress,
    Healthy,
}

/// Rules in evaluation order. [`HealthRule::Healthy`] is the fallback and is
/// not listed.
pub const RULE_ORDER: [HealthRule; 4] = [
    HealthRule::LowSoilMoisture,
    HealthRule::AdverseClimate,
    HealthRule::ImprovableMoisture,
    HealthRule::ColdStress,
];

impl HealthRule {
    /// Whether the rule's condition holds for the given readings
    pub fn matches(&self, metrics: &HealthMetrics) -> bool {
        match self {
            HealthRule::LowSoilMoisture => metrics.soil_moisture < CRITICAL_SOIL_MOISTURE,
            // Heat and dry air share one branch and one advisory.
            HealthRule::AdverseClimate => {
                metrics.temperature > HEAT_STRESS_TEMPERATURE || metrics.humidity < LOW_HUMIDITY
            }
            HealthRule::ImprovableMoisture => metrics.soil_moisture < ADEQUATE_SOIL_MOISTURE,
            HealthRule::ColdStress => metrics.temperature < COLD_STRESS_TEMPERATURE,
            HealthRule::Healthy => true,
        }
    }

    pub fn status(&self) -> HealthStatus {
        match self {
            HealthRule::LowSoilMoisture => HealthStatus::Poor,
            HealthRule::AdverseClimate
            | HealthRule::ImprovableMoisture
            | HealthRule::ColdStress => HealthStatus::Moderate,
            HealthRule::Healthy => HealthStatus::Good,
        }
    }

    /// Advice shown to the grower
    pub fn advice(&self) -> &'static str {
        match self {
            HealthRule::LowSoilMoisture => {
                "Soil moisture is low. Immediate irrigation required. Check irrigation system."
            }
            HealthRule::AdverseClimate => {
                "Climate conditions need monitoring. Consider shade nets or humidity management."
            }
            HealthRule::ImprovableMoisture => {
                "Soil moisture is adequate but could be improved. Schedule irrigation soon."
            }
            HealthRule::ColdStress => {
                "Temperature is low. Monitor for cold stress. Consider protective measures."
            }
            HealthRule::Healthy => "Crop is healthy. Continue current practices.",
        }
    }
}

/// Health verdict computed from one set of readings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthVerdict {
    pub status: HealthStatus,
    pub advice: String,
    pub color: Severity,
    pub rule: HealthRule,
    /// The exact readings the verdict was computed from
    pub metrics: HealthMetrics,
}

impl HealthVerdict {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Good
    }
}

/// Find the first rule matching the readings
pub fn matching_rule(metrics: &HealthMetrics) -> HealthRule {
    RULE_ORDER
        .iter()
        .copied()
        .find(|rule| rule.matches(metrics))
        .unwrap_or(HealthRule::Healthy)
}

/// Evaluate crop health from the given readings.
///
/// Readings must be finite; callers validate input before evaluating.
pub fn evaluate(metrics: &HealthMetrics) -> HealthVerdict {
    let rule = matching_rule(metrics);
    let status = rule.status();

    HealthVerdict {
        status,
        advice: rule.advice().to_string(),
        color: status.severity(),
        rule,
        metrics: *metrics,
    }
}
