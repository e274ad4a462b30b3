// Read-only access to the exported session list (JSON array)

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use trainlog::WorkoutSession;

/// JSON file holding the session snapshot exported by the data store
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all sessions, most recent first.
    ///
    /// A missing file means no sessions have been recorded yet.
    pub fn load(&self) -> Result<Vec<WorkoutSession>> {
        if !self.path.exists() {
            tracing::info!("Session file not found at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file {}", self.path.display()))?;

        let mut sessions: Vec<WorkoutSession> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session file {}", self.path.display()))?;

        // Sort by completion time descending (most recent first)
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

        tracing::debug!("Loaded {} sessions from {:?}", sessions.len(), self.path);
        Ok(sessions)
    }
}
