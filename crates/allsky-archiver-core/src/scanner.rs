/// Directory walker — enumerates every directory below a base path.
///
/// Traversal is sequential and pre-order: a directory is yielded before any
/// of its descendants, and siblings are visited in file-name order so runs
/// are reproducible. Symbolic links are never followed, so a symlinked
/// directory is neither yielded nor descended into.
///
/// The walker is driven by the pipeline, which deletes directories while the
/// walk is in progress. After removing the directory it was just handed, the
/// caller must call [`DirectoryWalker::skip_current_dir`] so the walk does not
/// try to descend into it.
///
/// A directory below the base that cannot be read is logged and its subtree
/// skipped; the walk carries on with the next entry. Only a failure to read
/// the base itself is returned as an error.
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

pub struct DirectoryWalker {
    inner: walkdir::IntoIter,
}

impl DirectoryWalker {
    /// Walk everything strictly below `base` (the base itself is not yielded).
    pub fn new(base: &Path) -> Self {
        let inner = WalkDir::new(base)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self { inner }
    }

    /// Do not descend into the directory most recently yielded.
    pub fn skip_current_dir(&mut self) {
        self.inner.skip_current_dir();
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    warn!("Skipping unreadable directory: {err}");
                    continue;
                }
                Err(err) => return Some(Err(err.into())),
            };
            if entry.file_type().is_dir() {
                trace!(depth = entry.depth(), "walker entered {}", entry.path().display());
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
