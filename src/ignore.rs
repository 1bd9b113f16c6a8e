//! File and directory ignore pattern handling for starter kits.
//! This module processes .subthemeignore files to exclude specific paths
//! from the mirror step, similar to .gitignore functionality.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns excluded from every mirror, regardless of the kit's ignore file.
/// Directory contents have to be matched explicitly, hence the `/**` twins.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = [".git", ".git/**", IGNORE_FILE];

/// Builds the glob set applied while mirroring a starter kit.
///
/// Combines the default exclusions with the kit's optional `.subthemeignore`
/// file, one glob pattern per line.
///
/// # Arguments
/// * `template_root` - Resolved starter-kit root directory
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - If the .subthemeignore file doesn't exist, only defaults apply
/// - Blank lines and lines starting with `#` are skipped
/// - Invalid patterns result in an `Error::Ignore`
///
/// # Example
/// ```ignore
/// # Contents of .subthemeignore:
/// *.swp
/// node_modules/**
/// ```
pub fn load_ignore_patterns<P: AsRef<Path>>(template_root: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::Ignore(format!("invalid default pattern '{}': {}", pattern, e))
        })?);
    }

    let ignore_path = template_root.as_ref().join(IGNORE_FILE);
    if let Ok(contents) = read_to_string(&ignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::Ignore(format!(".subthemeignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".subthemeignore does not exist")
    }

    builder
        .build()
        .map_err(|e| Error::Ignore(format!(".subthemeignore loading failed: {}", e)))
}
