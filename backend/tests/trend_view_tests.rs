//! Trend aggregation and crop view tests
//!
//! Tests for the monitoring read model including:
//! - Property 4: Trend Length Preservation
//! - Property 5: Trend Order Preservation
//! - Property 6: Latest Verdict Equivalence

use chrono::{Duration, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::models::{
    aggregate, build_view, evaluate, latest_observation, Crop, CropView, Observation, TrendPoint,
};
use uuid::Uuid;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn test_crop() -> Crop {
    Crop {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        name: "Maize".to_string(),
        soil_type: "Sandy".to_string(),
        area_hectares: Decimal::new(125, 2),
        sowing_date: base_date(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn observation(day_offset: i64, temperature: f64, humidity: f64, soil_moisture: f64) -> Observation {
    Observation {
        id: Uuid::new_v4(),
        crop_id: Uuid::nil(),
        observed_on: base_date() + Duration::days(day_offset),
        temperature,
        humidity,
        soil_moisture,
        growth_stage: "Vegetative".to_string(),
        created_at: Utc::now(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_no_data_state() {
        assert!(aggregate(&[]).is_empty());

        let view = build_view(test_crop(), &[]);
        assert!(view.latest_verdict.is_none());
        assert!(view.trend.is_empty());
        assert_eq!(view.observation_count, 0);
    }

    #[test]
    fn test_trend_point_labels_and_values() {
        let observations = vec![
            observation(4, 28.5, 65.0, 45.0),
            observation(5, 30.0, 60.0, 42.0),
        ];

        let series = aggregate(&observations);
        assert_eq!(
            series.points()[0],
            TrendPoint {
                date: "Jan 5".to_string(),
                temperature: 28.5,
                humidity: 65.0,
                soil_moisture: 45.0,
            }
        );
        assert_eq!(series.points()[1].date, "Jan 6");
    }

    #[test]
    fn test_view_verdict_from_latest_reading() {
        let observations = vec![
            observation(0, 25.0, 60.0, 20.0),
            observation(1, 25.0, 60.0, 70.0),
        ];

        let view = build_view(test_crop(), &observations);
        let verdict = view.latest_verdict.unwrap();
        assert!(verdict.is_healthy());
        assert_eq!(verdict.metrics.soil_moisture, 70.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted_defensively() {
        let observations = vec![
            observation(2, 22.0, 60.0, 60.0),
            observation(0, 20.0, 60.0, 60.0),
            observation(1, 21.0, 60.0, 60.0),
        ];

        assert_eq!(aggregate(&observations).temperatures(), vec![20.0, 21.0, 22.0]);
        assert_eq!(
            latest_observation(&observations).unwrap().id,
            observations[0].id
        );
    }

    #[test]
    fn test_view_wire_shape() {
        let view = build_view(test_crop(), &[observation(0, 25.0, 60.0, 60.0)]);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["latestVerdict"]["status"], "Good");
        assert_eq!(json["trend"][0]["date"], "Jan 1");
        assert_eq!(json["observationCount"], 1);
        assert_eq!(json["crop"]["name"], "Maize");

        let empty = serde_json::to_value(CropView::metadata_only(test_crop())).unwrap();
        assert!(empty["latestVerdict"].is_null());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

/// Observations already in chronological order; dates may repeat
fn sorted_observations_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(
        (0i64..3, -5.0f64..45.0, 0.0f64..100.0, 0.0f64..100.0),
        0..30,
    )
    .prop_map(|steps| {
        let mut day = 0;
        steps
            .into_iter()
            .map(|(gap, t, h, s)| {
                day += gap;
                observation(day, t, h, s)
            })
            .collect()
    })
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Property 4: Trend Length Preservation
        #[test]
        fn prop_trend_length_matches_observations(obs in sorted_observations_strategy()) {
            prop_assert_eq!(aggregate(&obs).len(), obs.len());
            prop_assert_eq!(build_view(test_crop(), &obs).trend.len(), obs.len());
        }

        /// Property 5: Trend Order Preservation
        #[test]
        fn prop_sorted_input_order_is_preserved(obs in sorted_observations_strategy()) {
            let series = aggregate(&obs);
            let expected: Vec<f64> = obs.iter().map(|o| o.soil_moisture).collect();
            prop_assert_eq!(series.soil_moistures(), expected);
        }

        /// Property 5 (continued): aggregation is idempotent
        #[test]
        fn prop_aggregation_is_idempotent(obs in sorted_observations_strategy()) {
            prop_assert_eq!(aggregate(&obs), aggregate(&obs));
        }

        /// Property 6: Latest Verdict Equivalence
        #[test]
        fn prop_latest_verdict_is_last_element(obs in sorted_observations_strategy()) {
            let view = build_view(test_crop(), &obs);
            let expected = obs.last().map(|o| evaluate(&o.metrics()));
            prop_assert_eq!(view.latest_verdict, expected);
        }

        /// Property 6 (continued): reversing input does not change the
        /// selected latest date
        #[test]
        fn prop_latest_has_max_date(obs in sorted_observations_strategy()) {
            let mut reversed = obs.clone();
            reversed.reverse();

            let latest = latest_observation(&reversed).map(|o| o.observed_on);
            let max_date = obs.iter().map(|o| o.observed_on).max();
            prop_assert_eq!(latest, max_date);
        }
    }
}
