/// Run configuration.
///
/// The retention window is fixed; `with_now` exists so a run can be pinned
/// to a known clock.
use crate::retention::{RetentionThreshold, DEFAULT_RETENTION_DAYS};
use chrono::NaiveDateTime;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ArchiverConfig {
    /// Root of the tree to scan. Must exist.
    pub base_dir: PathBuf,
    /// Root under which `<category>/` subtrees are created.
    pub target_dir: PathBuf,
    pub retention_days: i64,
    /// Local wall-clock time the threshold is computed from.
    pub now: NaiveDateTime,
}

impl ArchiverConfig {
    pub fn new(base_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            target_dir: target_dir.into(),
            retention_days: DEFAULT_RETENTION_DAYS,
            now: chrono::Local::now().naive_local(),
        }
    }

    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn threshold(&self) -> RetentionThreshold {
        RetentionThreshold::new(self.now, self.retention_days)
    }
}
