//! Archive extraction for packed starter kits.
//! Format-specific decoding stays behind the `Extractor` trait; the factory
//! picks an implementation from the packed file's name.

use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// A component able to unpack one archive into a target directory.
pub trait Extractor {
    /// Extracts the archive into `target`, creating it if needed.
    fn extract_to(&self, target: &Path) -> Result<()>;
}

/// Resolves an extraction component for a packed file.
pub trait ExtractorFactory {
    /// Returns an extractor for the file, or `Error::Extract` when the
    /// format is unrecognized.
    fn for_file(&self, path: &Path) -> Result<Box<dyn Extractor>>;
}

/// Factory dispatching on the packed file's extension.
/// Supported formats: `.zip`, `.tar.gz`, `.tgz`, `.tar`.
pub struct FormatExtractorFactory;

impl ExtractorFactory for FormatExtractorFactory {
    fn for_file(&self, path: &Path) -> Result<Box<dyn Extractor>> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if name.ends_with(".zip") {
            Ok(Box::new(ZipExtractor { archive: path.to_path_buf() }))
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(Box::new(TarExtractor { archive: path.to_path_buf(), gzip: true }))
        } else if name.ends_with(".tar") {
            Ok(Box::new(TarExtractor { archive: path.to_path_buf(), gzip: false }))
        } else {
            Err(Error::Extract(format!(
                "unsupported archive format: '{}'",
                path.display()
            )))
        }
    }
}

struct ZipExtractor {
    archive: PathBuf,
}

impl Extractor for ZipExtractor {
    fn extract_to(&self, target: &Path) -> Result<()> {
        let file = File::open(&self.archive).map_err(Error::Io)?;
        let mut archive = ZipArchive::new(file).map_err(|e| {
            Error::Extract(format!("failed to read '{}': {}", self.archive.display(), e))
        })?;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(|e| {
                Error::Extract(format!(
                    "failed to read entry {} of '{}': {}",
                    index,
                    self.archive.display(),
                    e
                ))
            })?;
            let entry_path = sanitize_entry_path(entry.name())?;
            let destination = target.join(entry_path);

            if entry.name().ends_with('/') {
                fs::create_dir_all(&destination).map_err(Error::Io)?;
                continue;
            }

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }

            let mut output = File::create(&destination).map_err(Error::Io)?;
            io::copy(&mut entry, &mut output).map_err(Error::Io)?;
        }

        Ok(())
    }
}

struct TarExtractor {
    archive: PathBuf,
    gzip: bool,
}

impl Extractor for TarExtractor {
    // tar's unpack already refuses entries escaping the target directory.
    fn extract_to(&self, target: &Path) -> Result<()> {
        fs::create_dir_all(target).map_err(Error::Io)?;
        let file = File::open(&self.archive).map_err(Error::Io)?;

        let result = if self.gzip {
            tar::Archive::new(GzDecoder::new(file)).unpack(target)
        } else {
            tar::Archive::new(file).unpack(target)
        };

        result.map_err(|e| {
            Error::Extract(format!(
                "failed to unpack '{}': {}",
                self.archive.display(),
                e
            ))
        })
    }
}

/// Validates an archive entry path before it touches the filesystem.
/// Absolute entries and parent traversal are rejected.
pub fn sanitize_entry_path(entry: &str) -> Result<PathBuf> {
    let path = Path::new(entry);
    if path.is_absolute() {
        return Err(Error::Extract(format!("absolute archive entry '{}'", entry)));
    }

    let mut sanitized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => sanitized.push(segment),
            Component::CurDir => {}
            _ => {
                return Err(Error::Extract(format!(
                    "unsafe archive entry '{}'",
                    entry
                )));
            }
        }
    }

    Ok(sanitized)
}
