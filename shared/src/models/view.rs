//! Crop aggregate view: crop metadata with its latest verdict and trend

use serde::{Deserialize, Serialize};

use super::{aggregate, evaluate, Crop, HealthVerdict, Observation, TrendSeries};

/// Read model consumed by the presentation layer. Rebuilt in full on every
/// read, never patched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropView {
    pub crop: Crop,
    /// `None` when the crop has no observations
    pub latest_verdict: Option<HealthVerdict>,
    pub trend: TrendSeries,
    pub observation_count: usize,
}

impl CropView {
    /// View carrying crop metadata only, used when observations could not be
    /// fetched
    pub fn metadata_only(crop: Crop) -> Self {
        Self {
            crop,
            latest_verdict: None,
            trend: TrendSeries::default(),
            observation_count: 0,
        }
    }

    pub fn has_observations(&self) -> bool {
        self.observation_count > 0
    }
}

/// Chronologically latest observation; among observations sharing the latest
/// date, the last inserted one.
pub fn latest_observation(observations: &[Observation]) -> Option<&Observation> {
    // max_by_key returns the last of several equal maxima
    observations.iter().max_by_key(|o| o.observed_on)
}

/// Build the view of a crop from its complete observation sequence
pub fn build_view(crop: Crop, observations: &[Observation]) -> CropView {
    let latest_verdict = latest_observation(observations).map(|o| evaluate(&o.metrics()));

    CropView {
        crop,
        latest_verdict,
        trend: aggregate(observations),
        observation_count: observations.len(),
    }
}
