//! Crop health evaluation tests
//!
//! Tests for the health rule evaluator including:
//! - Property 1: Evaluation Determinism
//! - Property 2: Rule Precedence
//! - Property 3: Severity Consistency

use proptest::prelude::*;
use shared::models::{
    evaluate, matching_rule, HealthMetrics, HealthRule, HealthStatus, Severity, RULE_ORDER,
};

fn metrics(temperature: f64, humidity: f64, soil_moisture: f64) -> HealthMetrics {
    HealthMetrics::new(temperature, humidity, soil_moisture)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Soil moisture wins even though climate also qualifies
    #[test]
    fn test_low_soil_moisture_precedence() {
        let verdict = evaluate(&metrics(40.0, 20.0, 30.0));
        assert_eq!(verdict.status, HealthStatus::Poor);
        assert_eq!(verdict.color, Severity::Destructive);
    }

    #[test]
    fn test_healthy_crop() {
        let verdict = evaluate(&metrics(30.0, 50.0, 60.0));
        assert_eq!(verdict.status, HealthStatus::Good);
        assert_eq!(verdict.color, Severity::Success);
    }

    /// Heat triggers the climate rule; moisture is sufficient
    #[test]
    fn test_heat_stress() {
        let verdict = evaluate(&metrics(40.0, 50.0, 60.0));
        assert_eq!(verdict.status, HealthStatus::Moderate);
        assert_eq!(verdict.rule, HealthRule::AdverseClimate);
    }

    #[test]
    fn test_cold_stress() {
        let verdict = evaluate(&metrics(10.0, 50.0, 60.0));
        assert_eq!(verdict.status, HealthStatus::Moderate);
        assert_eq!(verdict.rule, HealthRule::ColdStress);
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(
            RULE_ORDER,
            [
                HealthRule::LowSoilMoisture,
                HealthRule::AdverseClimate,
                HealthRule::ImprovableMoisture,
                HealthRule::ColdStress,
            ]
        );
    }

    #[test]
    fn test_advice_text() {
        assert_eq!(
            evaluate(&metrics(25.0, 60.0, 20.0)).advice,
            "Soil moisture is low. Immediate irrigation required. Check irrigation system."
        );
        assert_eq!(
            evaluate(&metrics(25.0, 20.0, 60.0)).advice,
            "Climate conditions need monitoring. Consider shade nets or humidity management."
        );
        assert_eq!(
            evaluate(&metrics(25.0, 60.0, 45.0)).advice,
            "Soil moisture is adequate but could be improved. Schedule irrigation soon."
        );
        assert_eq!(
            evaluate(&metrics(5.0, 60.0, 60.0)).advice,
            "Temperature is low. Monitor for cold stress. Consider protective measures."
        );
    }

    /// Request/response shape used by the analysis endpoint
    #[test]
    fn test_request_response_shape() {
        let request: HealthMetrics =
            serde_json::from_str(r#"{"temperature": 40, "humidity": 50, "soilMoisture": 60}"#)
                .unwrap();
        let response = serde_json::to_value(evaluate(&request)).unwrap();

        assert_eq!(response["status"], "Moderate");
        assert_eq!(response["color"], "warning");
        assert_eq!(response["metrics"]["soilMoisture"], 60.0);
        assert!(response["advice"].is_string());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn metrics_strategy() -> impl Strategy<Value = HealthMetrics> {
    (-10.0f64..50.0, 0.0f64..100.0, 0.0f64..100.0)
        .prop_map(|(t, h, s)| HealthMetrics::new(t, h, s))
}

/// Reference implementation of the rule cascade
fn expected_status(m: &HealthMetrics) -> HealthStatus {
    if m.soil_moisture < 35.0 {
        HealthStatus::Poor
    } else if m.temperature > 38.0 || m.humidity < 30.0 {
        HealthStatus::Moderate
    } else if m.soil_moisture < 50.0 {
        HealthStatus::Moderate
    } else if m.temperature < 15.0 {
        HealthStatus::Moderate
    } else {
        HealthStatus::Good
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Property 1: Evaluation Determinism
        #[test]
        fn prop_evaluation_is_deterministic(m in metrics_strategy()) {
            prop_assert_eq!(evaluate(&m), evaluate(&m));
        }

        /// Property 2: Rule Precedence
        /// Any soil moisture below 35 is Poor regardless of climate
        #[test]
        fn prop_low_moisture_always_poor(
            t in -10.0f64..50.0,
            h in 0.0f64..100.0,
            s in 0.0f64..35.0,
        ) {
            let verdict = evaluate(&metrics(t, h, s));
            prop_assert_eq!(verdict.status, HealthStatus::Poor);
            prop_assert_eq!(verdict.rule, HealthRule::LowSoilMoisture);
        }

        /// Property 2 (continued): verdict follows the ordered cascade
        #[test]
        fn prop_matches_reference_cascade(m in metrics_strategy()) {
            prop_assert_eq!(evaluate(&m).status, expected_status(&m));
        }

        /// Property 2 (continued): the chosen rule matches and no earlier rule does
        #[test]
        fn prop_first_matching_rule_wins(m in metrics_strategy()) {
            let rule = matching_rule(&m);
            prop_assert!(rule.matches(&m));

            let earlier = RULE_ORDER.iter().take_while(|r| **r != rule);
            for r in earlier {
                prop_assert!(!r.matches(&m));
            }
        }

        /// Property 3: Severity Consistency
        #[test]
        fn prop_severity_mirrors_status(m in metrics_strategy()) {
            let verdict = evaluate(&m);
            prop_assert_eq!(verdict.color, verdict.status.severity());
            prop_assert_eq!(verdict.metrics, m);
        }
    }
}
