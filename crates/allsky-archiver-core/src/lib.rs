/// allsky-archiver core — scanning, retention and archiving.
///
/// This crate holds all logic with no CLI dependencies.
///
/// # Modules
///
/// - [`model`] — Capture categories and per-directory candidates.
/// - [`scanner`] — Sequential pre-order directory walker.
/// - [`retention`] — The `now - 7 days` threshold and age test.
/// - [`archive`] — tar.gz creation and source removal.
/// - [`pipeline`] — One archiving run, start to finish.
/// - [`summary`] — Counters reported at the end of a run.
/// - [`config`] — Run configuration.
/// - [`error`] — Typed errors; every one aborts the run.
pub mod archive;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod retention;
pub mod scanner;
pub mod summary;

pub use config::ArchiverConfig;
pub use error::{ArchiverError, Result};
pub use pipeline::run;
pub use summary::RunSummary;
