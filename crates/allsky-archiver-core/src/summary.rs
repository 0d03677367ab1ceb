/// Per-run counters, reported once the run completes.
use crate::archive::ArchivedFolder;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories yielded by the walker.
    pub scanned: u64,
    /// Directories whose path carries a category marker.
    pub categorized: u64,
    /// Categorized directories with a date in their name.
    pub dated: u64,
    /// Dated directories not yet past the threshold.
    pub retained: u64,
    pub archived: Vec<ArchivedFolder>,
}

impl RunSummary {
    pub fn archived_count(&self) -> usize {
        self.archived.len()
    }

    /// Sum of all archive sizes written during the run.
    pub fn bytes_written(&self) -> u64 {
        self.archived.iter().map(|a| a.compressed_size).sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories scanned, {} categorized, {} dated, {} archived ({}), {} retained",
            self.scanned,
            self.categorized,
            self.dated,
            self.archived_count(),
            format_size(self.bytes_written()),
            self.retained,
        )
    }
}

/// Format a byte count with binary units and short labels (KB, MB, GB).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit >= 2 {
        format!("{value:.2} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
