//! Resolution of installed theme paths.

use std::path::{Path, PathBuf};

use crate::constants::THEME_DIRS;
use crate::error::{Error, Result};

/// Maps a theme identifier to its installed filesystem path.
pub trait ThemePathResolver {
    fn resolve(&self, theme_id: &str) -> Result<PathBuf>;
}

/// Resolver scanning the conventional theme directories under a site root.
pub struct FilesystemThemeResolver {
    root: PathBuf,
}

impl FilesystemThemeResolver {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

impl ThemePathResolver for FilesystemThemeResolver {
    /// Returns the first matching theme directory.
    ///
    /// # Errors
    /// * `Error::Theme` if the theme is not installed under any known
    ///   theme directory
    fn resolve(&self, theme_id: &str) -> Result<PathBuf> {
        for dir in THEME_DIRS {
            let candidate = self.root.join(dir).join(theme_id);
            if candidate.is_dir() {
                return Ok(candidate);
            }
        }

        Err(Error::Theme(format!(
            "theme '{}' is not installed under '{}'",
            theme_id,
            self.root.display()
        )))
    }
}
