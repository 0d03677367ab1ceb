/// A directory under inspection: its category and the date embedded in
/// its name.
use super::category::{classify, Category};
use crate::error::{ArchiverError, Result};
use chrono::NaiveDate;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Number of digits in a `YYYYMMDD` token.
pub const DATE_TOKEN_LEN: usize = 8;

/// A categorized directory found during the walk.
///
/// Built per directory and dropped once the directory has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFolder {
    pub path: PathBuf,
    /// Base name of the folder, byte for byte; also the archive file stem
    /// and the root entry name inside the archive.
    pub name: OsString,
    pub category: Category,
    /// `None` when the name has no 8-digit run.
    pub date: Option<NaiveDate>,
}

impl CandidateFolder {
    /// Inspect `path`, returning `Ok(None)` when it has no category.
    ///
    /// Fails with [`ArchiverError::InvalidDate`] when the name carries an
    /// 8-digit run that is not a calendar date.
    pub fn inspect(path: &Path) -> Result<Option<Self>> {
        let Some(category) = classify(path) else {
            return Ok(None);
        };

        let name = path.file_name().map(OsString::from).unwrap_or_default();

        // Lossy text is only for the date search; digits survive it unchanged.
        let date = match extract_date_token(&name.to_string_lossy()) {
            Some(token) => Some(parse_date_token(token, path)?),
            None => None,
        };

        Ok(Some(Self {
            path: path.to_path_buf(),
            name,
            category,
            date,
        }))
    }
}

/// Find the first run of 8 ASCII digits in `name`, scanning left to right.
///
/// A longer run of digits yields its first eight.
pub fn extract_date_token(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == DATE_TOKEN_LEN {
                // ASCII digits are single bytes, so these are char boundaries.
                return Some(&name[run_start..run_start + DATE_TOKEN_LEN]);
            }
        } else {
            run_len = 0;
        }
    }
    None
}

/// Parse a `YYYYMMDD` token into a calendar date.
///
/// `folder` is only used for the error message.
pub fn parse_date_token(token: &str, folder: &Path) -> Result<NaiveDate> {
    let invalid = || ArchiverError::InvalidDate {
        token: token.to_string(),
        folder: folder.to_path_buf(),
    };

    if token.len() != DATE_TOKEN_LEN || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = token[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = token[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = token[6..8].parse().map_err(|_| invalid())?;

    // Year 0000 is outside the supported calendar range.
    if year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
