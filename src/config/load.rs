use serde::{Deserialize, Serialize};

use crate::models::WorkoutSession;

/// Coefficients turning session volume into training load points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSettings {
    #[serde(default = "default_running_load_per_mile")]
    pub running_load_per_mile: f64,

    #[serde(default = "default_lifting_volume_per_point")]
    pub lifting_volume_per_point: f64,
}

fn default_running_load_per_mile() -> f64 {
    10.0
}

fn default_lifting_volume_per_point() -> f64 {
    100.0
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            running_load_per_mile: default_running_load_per_mile(),
            lifting_volume_per_point: default_lifting_volume_per_point(),
        }
    }
}

impl LoadSettings {
    pub fn running_load(&self, session: &WorkoutSession) -> f64 {
        clamp_load(session.distance_miles() * self.running_load_per_mile)
    }

    pub fn lifting_load(&self, session: &WorkoutSession) -> f64 {
        if self.lifting_volume_per_point <= 0.0 {
            return 0.0;
        }
        clamp_load(session.lifting_volume() / self.lifting_volume_per_point)
    }
}

fn clamp_load(load: f64) -> f64 {
    if load.is_finite() {
        load.max(0.0)
    } else {
        0.0
    }
}
