//! Artifact fetching for packed starter kits.
//! Brings the configured artifact into the workspace `pack/` directory,
//! downloading remote archives and copying local ones.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::blocking::Client;

use crate::error::{Error, Result};
use crate::source::{derive_file_name, SourceLocation};

/// Places the packed starter kit into `pack_dir` and returns its path.
///
/// Remote archives are downloaded with a plain GET; local files are copied.
/// Any failure is terminal for the pipeline, there are no retries.
pub fn fetch_artifact(location: &SourceLocation, pack_dir: &Path) -> Result<PathBuf> {
    match location {
        SourceLocation::Archive(url) => {
            let target = pack_dir.join(derive_file_name(url));
            debug!("Downloading '{}' to '{}'.", url, target.display());
            download(url, &target)?;
            Ok(target)
        }
        SourceLocation::Local(path) => {
            if !path.is_file() {
                return Err(Error::Fetch(format!(
                    "starter kit artifact '{}' does not exist",
                    path.display()
                )));
            }
            let file_name = path
                .file_name()
                .ok_or_else(|| {
                    Error::Fetch(format!("invalid artifact path '{}'", path.display()))
                })?
                .to_os_string();
            let target = pack_dir.join(file_name);
            debug!("Copying '{}' to '{}'.", path.display(), target.display());
            fs::copy(path, &target).map_err(|e| {
                Error::Fetch(format!("failed to copy '{}': {}", path.display(), e))
            })?;
            Ok(target)
        }
        SourceLocation::Git(repo) => Err(Error::Fetch(format!(
            "git repository '{}' is cloned, not fetched as an artifact",
            repo
        ))),
    }
}

fn download(url: &url::Url, target: &Path) -> Result<()> {
    let client = Client::new();
    let mut response = client
        .get(url.as_str())
        .send()
        .map_err(|e| Error::Fetch(format!("failed to download '{}': {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!(
            "'{}' returned status {}",
            url,
            response.status()
        )));
    }

    let mut output = File::create(target).map_err(Error::Io)?;
    response
        .copy_to(&mut output)
        .map_err(|e| Error::Fetch(format!("failed to store '{}': {}", url, e)))?;
    Ok(())
}
