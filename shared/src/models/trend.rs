//! Trend series for charting observations over time

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Observation;

/// Chart label format, e.g. "Jan 5"
pub const DATE_LABEL_FORMAT: &str = "%b %-d";

/// Short display label for an observation date. Labels are never compared.
pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// One plotted point per observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
}

impl From<&Observation> for TrendPoint {
    fn from(observation: &Observation) -> Self {
        Self {
            date: date_label(observation.observed_on),
            temperature: observation.temperature,
            humidity: observation.humidity,
            soil_moisture: observation.soil_moisture,
        }
    }
}

/// Plottable metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
    SoilMoisture,
}

impl Metric {
    fn value(&self, point: &TrendPoint) -> f64 {
        match self {
            Metric::Temperature => point.temperature,
            Metric::Humidity => point.humidity,
            Metric::SoilMoisture => point.soil_moisture,
        }
    }
}

/// Statistics over one metric of a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: f64,
}

/// Per-metric statistics of a series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub temperature: Option<MetricSummary>,
    pub humidity: Option<MetricSummary>,
    pub soil_moisture: Option<MetricSummary>,
}

/// Ordered chart series, one point per observation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// An empty series is the "no data yet" state
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.date.as_str()).collect()
    }

    /// Values of a single metric in series order
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.points.iter().map(|p| metric.value(p)).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.values(Metric::Temperature)
    }

    pub fn humidities(&self) -> Vec<f64> {
        self.values(Metric::Humidity)
    }

    pub fn soil_moistures(&self) -> Vec<f64> {
        self.values(Metric::SoilMoisture)
    }

    /// Min, max, mean and latest value of a metric; `None` for an empty series
    pub fn metric_summary(&self, metric: Metric) -> Option<MetricSummary> {
        let latest = metric.value(self.points.last()?);
        let values = self.values(metric);

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        Some(MetricSummary {
            min,
            max,
            mean,
            latest,
        })
    }

    pub fn summary(&self) -> TrendSummary {
        TrendSummary {
            temperature: self.metric_summary(Metric::Temperature),
            humidity: self.metric_summary(Metric::Humidity),
            soil_moisture: self.metric_summary(Metric::SoilMoisture),
        }
    }
}

impl FromIterator<TrendPoint> for TrendSeries {
    fn from_iter<I: IntoIterator<Item = TrendPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Observations sorted by date ascending. The sort is stable, so observations
/// sharing a date keep their insertion order.
pub fn sort_chronologically(observations: &[Observation]) -> Vec<&Observation> {
    let mut sorted: Vec<&Observation> = observations.iter().collect();
    sorted.sort_by_key(|o| o.observed_on);
    sorted
}

/// Map observations 1:1 onto a chart series.
///
/// No bucketing or gap filling is performed; missing dates stay missing.
pub fn aggregate(observations: &[Observation]) -> TrendSeries {
    sort_chronologically(observations)
        .into_iter()
        .map(TrendPoint::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn observation(date: (i32, u32, u32), temperature: f64, soil_moisture: f64) -> Observation {
        Observation {
            id: Uuid::new_v4(),
            crop_id: Uuid::nil(),
            observed_on: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            temperature,
            humidity: 60.0,
            soil_moisture,
            growth_stage: "Vegetative".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "Jan 5");
        assert_eq!(date_label(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()), "Dec 25");
    }

    #[test]
    fn test_aggregate_empty() {
        let series = aggregate(&[]);
        assert!(series.is_empty());
        assert_eq!(series.summary().temperature, None);
    }

    #[test]
    fn test_aggregate_sorts_by_date() {
        let observations = vec![
            observation((2024, 3, 2), 22.0, 55.0),
            observation((2024, 3, 1), 20.0, 50.0),
        ];

        let series = aggregate(&observations);
        assert_eq!(series.labels(), vec!["Mar 1", "Mar 2"]);
        assert_eq!(series.temperatures(), vec![20.0, 22.0]);
    }

    #[test]
    fn test_same_date_keeps_insertion_order() {
        let observations = vec![
            observation((2024, 3, 1), 20.0, 50.0),
            observation((2024, 3, 1), 25.0, 45.0),
            observation((2024, 2, 28), 18.0, 40.0),
        ];

        let series = aggregate(&observations);
        assert_eq!(series.temperatures(), vec![18.0, 20.0, 25.0]);
        assert_eq!(series.soil_moistures(), vec![40.0, 50.0, 45.0]);
    }

    #[test]
    fn test_no_gap_filling() {
        let observations = vec![
            observation((2024, 1, 1), 20.0, 50.0),
            observation((2024, 1, 31), 21.0, 51.0),
        ];

        assert_eq!(aggregate(&observations).len(), 2);
    }

    #[test]
    fn test_metric_summary() {
        let observations = vec![
            observation((2024, 1, 1), 20.0, 50.0),
            observation((2024, 1, 2), 30.0, 40.0),
            observation((2024, 1, 3), 25.0, 60.0),
        ];

        let summary = aggregate(&observations)
            .metric_summary(Metric::Temperature)
            .unwrap();
        assert_eq!(summary.min, 20.0);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.mean, 25.0);
        assert_eq!(summary.latest, 25.0);
    }

    #[test]
    fn test_series_serializes_as_array() {
        let series = aggregate(&[observation((2024, 1, 5), 20.0, 50.0)]);
        let json = serde_json::to_value(&series).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["date"], "Jan 5");
        assert_eq!(json[0]["soilMoisture"], 50.0);
    }
}
