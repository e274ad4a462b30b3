use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Event;

/// Run portion of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub distance_miles: f64,
}

/// One lifting set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftSet {
    pub reps: u32,
    pub weight_lbs: f64,
}

impl LiftSet {
    /// Volume moved in this set (reps x weight), never negative
    pub fn volume(&self) -> f64 {
        let volume = f64::from(self.reps) * self.weight_lbs;
        if volume.is_finite() {
            volume.max(0.0)
        } else {
            0.0
        }
    }
}

/// Lifting portion of a completed session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LiftingRecord {
    #[serde(default)]
    pub sets: Vec<LiftSet>,
}

impl LiftingRecord {
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(LiftSet::volume).sum()
    }
}

/// Completed workout session as supplied by the data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub run: Option<RunRecord>,
    #[serde(default)]
    pub lifting: Option<LiftingRecord>,
}

impl WorkoutSession {
    /// Create an empty session with a generated ID
    pub fn new(completed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed_at,
            run: None,
            lifting: None,
        }
    }

    /// Attach a run; negative or NaN distances are clamped to zero
    pub fn with_run(mut self, distance_miles: f64) -> Self {
        self.run = Some(RunRecord {
            distance_miles: distance_miles.max(0.0),
        });
        self
    }

    /// Attach lifting sets
    pub fn with_lifting(mut self, sets: Vec<LiftSet>) -> Self {
        self.lifting = Some(LiftingRecord { sets });
        self
    }

    /// Run distance in miles, zero when the session has no run
    pub fn distance_miles(&self) -> f64 {
        self.run
            .map(|run| run.distance_miles)
            .filter(|d| d.is_finite())
            .map_or(0.0, |d| d.max(0.0))
    }

    /// Lifting volume, zero when the session has no lifting
    pub fn lifting_volume(&self) -> f64 {
        self.lifting.as_ref().map_or(0.0, LiftingRecord::volume)
    }

    /// The session's distance as an aggregation event
    pub fn distance_event(&self) -> Option<Event> {
        self.run
            .map(|run| Event::new(self.completed_at, run.distance_miles))
    }
}

/// Distance series for a set of sessions; sessions without a run are skipped
pub fn distance_events(sessions: &[WorkoutSession]) -> Vec<Event> {
    sessions
        .iter()
        .filter_map(WorkoutSession::distance_event)
        .collect()
}
