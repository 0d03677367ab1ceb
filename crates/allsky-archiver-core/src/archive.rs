/// Archiver/relocator — compresses one folder into
/// `<target>/<category>/<name>.tar.gz` and then deletes the folder.
///
/// The archive is fully written (tar trailer, gzip trailer, flush) before
/// the source is touched. A failure while writing returns
/// [`ArchiverError::Archive`] and leaves the source in place; a partially
/// written archive may remain and is overwritten by the next run.
use crate::error::{ArchiverError, Result};
use crate::model::{CandidateFolder, Category};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension of every archive produced.
pub const ARCHIVE_EXTENSION: &str = "tar.gz";

/// Result of archiving one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedFolder {
    pub source: PathBuf,
    pub archive: PathBuf,
    /// Size of the `.tar.gz` on disk.
    pub compressed_size: u64,
}

/// `<target>/<category>/<name>.tar.gz`, keeping `name`'s bytes as they are.
pub fn archive_path_for(target_dir: &Path, category: Category, name: &OsStr) -> PathBuf {
    let mut file_name = OsString::from(name);
    file_name.push(".");
    file_name.push(ARCHIVE_EXTENSION);
    target_dir.join(category.dir_name()).join(file_name)
}

/// Create `<target>/<category>/` if it does not exist yet.
pub fn ensure_category_dir(target_dir: &Path, category: Category) -> Result<PathBuf> {
    let dir = target_dir.join(category.dir_name());
    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|source| ArchiverError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!("Created target subdirectory: {}", dir.display());
    }
    Ok(dir)
}

/// Write `source` into a gzip tar at `archive`, rooted at `root_name`.
///
/// An existing file at `archive` is truncated. Returns the compressed size.
pub fn write_archive(source: &Path, root_name: &OsStr, archive: &Path) -> Result<u64> {
    build_tar_gz(source, root_name, archive).map_err(|err| ArchiverError::Archive {
        source_dir: source.to_path_buf(),
        archive: archive.to_path_buf(),
        source: err,
    })
}

fn build_tar_gz(source: &Path, root_name: &OsStr, archive: &Path) -> io::Result<u64> {
    let file = File::create(archive)?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    // Store symlinks as links; never pull in data from outside the folder.
    builder.follow_symlinks(false);
    builder.append_dir_all(root_name, source)?;

    let encoder = builder.into_inner()?;
    let mut writer = encoder.finish()?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    Ok(file.metadata()?.len())
}

/// Recursively delete the source folder.
pub fn remove_source(source: &Path) -> Result<()> {
    fs::remove_dir_all(source).map_err(|err| ArchiverError::Remove {
        path: source.to_path_buf(),
        source: err,
    })
}

/// Archive `candidate` under `target_dir`, then delete it.
pub fn archive_folder(candidate: &CandidateFolder, target_dir: &Path) -> Result<ArchivedFolder> {
    ensure_category_dir(target_dir, candidate.category)?;
    let archive = archive_path_for(target_dir, candidate.category, &candidate.name);

    info!(
        "Archiving folder: {} -> {}",
        candidate.path.display(),
        archive.display()
    );
    let compressed_size = write_archive(&candidate.path, &candidate.name, &archive)?;

    remove_source(&candidate.path)?;
    info!(
        "Deleted original folder after archiving: {}",
        candidate.path.display()
    );

    Ok(ArchivedFolder {
        source: candidate.path.clone(),
        archive,
        compressed_size,
    })
}
