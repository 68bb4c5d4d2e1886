//! Trend classification over a delta series

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{DayDelta, DeltaSeries};

/// Which way cash on hand moved across the whole series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Every day is higher than the previous day
    #[serde(rename = "surplus")]
    Surplus,
    /// Every day is lower than the previous day
    #[serde(rename = "deficit")]
    Deficit,
    /// Anything else, including flat days and empty input
    #[serde(rename = "mixed")]
    Mixed,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Surplus => "surplus",
            Scenario::Deficit => "deficit",
            Scenario::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a series.
///
/// An empty series is `Mixed`: "all positive" and "all negative" are both
/// vacuously true there, so neither is allowed to win.
pub fn classify(series: &DeltaSeries) -> Scenario {
    if series.is_empty() {
        tracing::debug!("empty delta series, classifying as mixed");
        return Scenario::Mixed;
    }

    let scenario = if series.iter().all(DayDelta::is_surplus) {
        Scenario::Surplus
    } else if series.iter().all(DayDelta::is_deficit) {
        Scenario::Deficit
    } else {
        Scenario::Mixed
    };

    tracing::debug!(deltas = series.len(), %scenario, "classified series");
    scenario
}
