/// Data model for a scan: what a directory is and when it was captured.
///
/// Re-exports the category classifier and the per-directory candidate type.
pub mod candidate;
pub mod category;

pub use candidate::{extract_date_token, parse_date_token, CandidateFolder, DATE_TOKEN_LEN};
pub use category::{classify, Category};
