/// Run orchestration: walk, classify, age-test, archive.
///
/// Everything runs on the calling thread. The first error ends the run;
/// folders already archived stay archived, nothing after the failing
/// folder is looked at.
use crate::archive::archive_folder;
use crate::config::ArchiverConfig;
use crate::error::{ArchiverError, Result};
use crate::model::CandidateFolder;
use crate::scanner::DirectoryWalker;
use crate::summary::RunSummary;
use std::fs;
use tracing::{debug, info};

/// Archive every expired capture folder under `config.base_dir`.
pub fn run(config: &ArchiverConfig) -> Result<RunSummary> {
    if !config.base_dir.is_dir() {
        return Err(ArchiverError::BaseDirectory {
            path: config.base_dir.clone(),
        });
    }

    if !config.target_dir.exists() {
        fs::create_dir_all(&config.target_dir).map_err(|source| ArchiverError::CreateDir {
            path: config.target_dir.clone(),
            source,
        })?;
        info!("Created target directory: {}", config.target_dir.display());
    }

    let threshold = config.threshold();
    info!(
        "Threshold date for archiving: {}",
        threshold.cutoff().format("%Y-%m-%d")
    );

    let mut summary = RunSummary::default();
    let mut walker = DirectoryWalker::new(&config.base_dir);

    while let Some(dir) = walker.next() {
        let dir = dir?;
        summary.scanned += 1;
        debug!("Scanning directory: {}", dir.display());

        let Some(candidate) = CandidateFolder::inspect(&dir)? else {
            debug!("Folder {} has no category", dir.display());
            continue;
        };
        summary.categorized += 1;
        debug!(
            "Folder '{}' categorized as: {}",
            candidate.name.to_string_lossy(),
            candidate.category
        );

        let Some(date) = candidate.date else {
            continue;
        };
        summary.dated += 1;
        debug!(
            "Found folder: {} (Date: {})",
            candidate.path.display(),
            date.format("%Y-%m-%d")
        );

        if !threshold.is_expired(date) {
            summary.retained += 1;
            continue;
        }

        debug!("Folder is older than threshold. Archiving...");
        let archived = archive_folder(&candidate, &config.target_dir)?;
        walker.skip_current_dir();
        summary.archived.push(archived);
    }

    info!("Archiving and cleanup complete: {summary}");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(base: &Path, target: &Path) -> ArchiverConfig {
        let now = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        ArchiverConfig::new(base, target).with_now(now)
    }

    #[test]
    fn counters_reflect_each_stage() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base");
        for d in [
            "cam/exposures/20240101",
            "cam/exposures/20240314",
            "cam/exposures/misc",
            "cam/images/20200101",
        ] {
            fs::create_dir_all(base.join(d)).unwrap();
        }

        let summary = run(&config(&base, &tmp.path().join("target"))).unwrap();

        // cam, cam/exposures, 4 leaves, cam/images
        assert_eq!(summary.scanned, 7);
        // exposures + its three children
        assert_eq!(summary.categorized, 4);
        assert_eq!(summary.dated, 2);
        assert_eq!(summary.retained, 1);
        assert_eq!(summary.archived_count(), 1);
        assert!(base.join("cam/images/20200101").is_dir());
    }

    /// An archived folder's own subdirectories are not visited afterwards.
    #[test]
    fn archived_folder_is_not_descended_into() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base");
        fs::create_dir_all(base.join("exposures/20200101/20200102")).unwrap();

        let summary = run(&config(&base, &tmp.path().join("target"))).unwrap();

        assert_eq!(summary.archived_count(), 1);
        assert_eq!(summary.scanned, 2);
        assert!(!base.join("exposures/20200101").exists());
        assert!(!tmp.path().join("target/exposures/20200102.tar.gz").exists());
    }

    #[test]
    fn target_directory_is_created() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base");
        fs::create_dir_all(&base).unwrap();
        let target = tmp.path().join("a/b/target");

        run(&config(&base, &target)).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn base_that_is_a_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("file");
        fs::write(&base, b"x").unwrap();

        let err = run(&config(&base, &tmp.path().join("t"))).unwrap_err();
        assert!(matches!(err, ArchiverError::BaseDirectory { .. }));
    }
}
