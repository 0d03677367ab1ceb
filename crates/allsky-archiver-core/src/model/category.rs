/// Capture-folder categories, derived from the folder's full path.
use std::fmt;
use std::path::Path;

/// Which kind of capture a folder holds.
///
/// The category also names the subdirectory of the target tree that
/// receives the folder's archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Exposures,
    Timelapse,
}

impl Category {
    /// Checked in order; the first marker found in the path wins.
    pub const ALL: [Category; 2] = [Category::Exposures, Category::Timelapse];

    /// Substring searched for in the full path, also used as the
    /// target subdirectory name.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Exposures => "exposures",
            Category::Timelapse => "timelapse",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Classify a directory by its full path.
///
/// The marker may appear anywhere in the path, including inside an
/// ancestor's name or the base directory itself. A path containing both
/// markers is `Exposures`.
pub fn classify(path: &Path) -> Option<Category> {
    let full = path.to_string_lossy();
    Category::ALL
        .into_iter()
        .find(|category| full.contains(category.dir_name()))
}
