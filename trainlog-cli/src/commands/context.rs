use anyhow::Result;
use std::path::Path;
use trainlog::WorkoutSession;

use crate::config::Config;
use crate::sessions::SessionFile;

/// Configuration and session snapshot shared by the data commands
pub struct AppContext {
    pub config: Config,
    pub sessions: Vec<WorkoutSession>,
}

impl AppContext {
    /// Load config, then sessions from `sessions_path` or the configured file
    pub fn load(config_path: Option<&Path>, sessions_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;

        let file = match sessions_path {
            Some(path) => SessionFile::new(path),
            None => SessionFile::new(&config.data.sessions_file),
        };
        let sessions = file.load()?;

        Ok(Self { config, sessions })
    }

    pub fn week_starts_on_monday(&self, override_monday: bool) -> bool {
        override_monday || self.config.calendar.week_starts_on_monday
    }
}
