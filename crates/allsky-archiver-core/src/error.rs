/// Error types for the archiver engine.
///
/// Every failure aborts the run. Variants exist so callers (and tests) can
/// tell which stage failed, not to drive recovery.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiverError {
    /// The base directory is missing or is not a directory.
    #[error("base directory {} does not exist or is not a directory", path.display())]
    BaseDirectory { path: PathBuf },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed (unreadable or vanished directory).
    #[error("directory walk failed")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    /// An 8-digit token that is not a valid `YYYYMMDD` calendar date.
    #[error("folder {} has invalid date token '{token}'", folder.display())]
    InvalidDate { token: String, folder: PathBuf },

    /// Writing the tar.gz failed. The source folder has not been touched.
    #[error("failed to archive {} into {}", source_dir.display(), archive.display())]
    Archive {
        source_dir: PathBuf,
        archive: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deleting the source folder failed after its archive was written.
    #[error("archived but failed to remove {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ArchiverError>;
