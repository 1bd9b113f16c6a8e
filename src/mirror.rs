//! Directory tree operations for the scaffold pipeline: top-level collapse
//! and the recursive additive mirror.

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Skips a single superfluous wrapper directory after extraction.
///
/// Many archive tools wrap all content inside one top-level folder named
/// after the release. If `dir` has exactly one direct child and that child
/// is a directory, the child is the real template root. An empty directory
/// or a single non-directory entry falls through unchanged.
pub fn collapse_top_level(dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(dir)
        .map_err(Error::Io)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(Error::Io)?;

    if entries.len() == 1 {
        let only = entries[0].path();
        if only.is_dir() {
            debug!("Collapsing wrapper directory '{}'.", only.display());
            return Ok(only);
        }
    }

    Ok(dir.to_path_buf())
}

/// Recursively copies the contents of `source` into `target`.
///
/// Creates `target` and missing intermediates. Same-named destination files
/// are overwritten; destination files absent from the source are left in
/// place. Entries matching `ignored` are skipped.
///
/// # Returns
/// * `Result<usize>` - Number of files copied
pub fn mirror(source: &Path, target: &Path, ignored: &GlobSet) -> Result<usize> {
    fs::create_dir_all(target).map_err(|e| {
        Error::Mirror(format!("failed to create '{}': {}", target.display(), e))
    })?;

    let mut copied = 0;
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::Mirror(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::Mirror(e.to_string()))?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        if ignored.is_match(relative) {
            debug!("Skipping ignored entry '{}'.", relative.display());
            continue;
        }

        let destination = target.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|e| {
                Error::Mirror(format!(
                    "failed to create '{}': {}",
                    destination.display(),
                    e
                ))
            })?;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Mirror(format!(
                        "failed to create '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            fs::copy(entry.path(), &destination).map_err(|e| {
                Error::Mirror(format!(
                    "failed to copy '{}' to '{}': {}",
                    entry.path().display(),
                    destination.display(),
                    e
                ))
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
