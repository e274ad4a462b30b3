use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dated, quantified point fed to the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub at: DateTime<Utc>,
    pub value: f64,
}

impl Event {
    pub fn new(at: DateTime<Utc>, value: f64) -> Self {
        Self { at, value }
    }

    /// Whether this event can contribute to a bucket sum.
    ///
    /// Zero, negative and non-finite values are skipped.
    pub fn counts(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

impl From<(DateTime<Utc>, f64)> for Event {
    fn from((at, value): (DateTime<Utc>, f64)) -> Self {
        Self::new(at, value)
    }
}
