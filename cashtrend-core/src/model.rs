//! Day-indexed balance deltas

use serde::{Deserialize, Serialize};

/// Signed change in cash on hand between a day and the reading before it.
///
/// Field order matters: the derived ordering compares `(day, delta)` as a tuple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayDelta {
    /// Day of the later of the two readings, as given by the source
    pub day: i64,
    /// Balance change in the smallest currency unit
    pub delta: i64,
}

impl DayDelta {
    pub fn new(day: i64, delta: i64) -> Self {
        Self { day, delta }
    }

    /// Returns true if cash went up on this day
    pub fn is_surplus(&self) -> bool {
        self.delta > 0
    }

    /// Returns true if cash went down on this day
    pub fn is_deficit(&self) -> bool {
        self.delta < 0
    }

    /// Magnitude of the change, safe for `i64::MIN`
    pub fn amount(&self) -> u64 {
        self.delta.unsigned_abs()
    }
}

impl From<(i64, i64)> for DayDelta {
    fn from((day, delta): (i64, i64)) -> Self {
        Self::new(day, delta)
    }
}

/// Chronologically ordered deltas for one source. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSeries {
    deltas: Vec<DayDelta>,
}

impl DeltaSeries {
    pub fn new(deltas: Vec<DayDelta>) -> Self {
        Self { deltas }
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayDelta> {
        self.deltas.iter()
    }

    pub fn as_slice(&self) -> &[DayDelta] {
        &self.deltas
    }

    /// Strictly negative deltas, in source order. Zero deltas are not deficits.
    pub fn deficits(&self) -> Vec<DayDelta> {
        self.deltas.iter().copied().filter(DayDelta::is_deficit).collect()
    }
}

impl FromIterator<DayDelta> for DeltaSeries {
    fn from_iter<I: IntoIterator<Item = DayDelta>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
