//! Token-substitution generator.
//! After the mirror step the destination still carries the starter kit's
//! placeholder tokens; this component rewrites them in place, in file
//! contents and in file names.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

/// Rewrites placeholder tokens under a destination directory.
///
/// The token map is ordered: token name to replacement pattern. Patterns are
/// rendered once against the scaffold context, then applied as literal
/// substitutions. Files whose contents are not valid UTF-8 are left alone.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    tokens: IndexMap<String, String>,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, tokens: IndexMap<String, String>) -> Self {
        Self { renderer, tokens }
    }

    /// Performs the in-place rewrite and returns the number of changed files.
    pub fn generate(&self, destination: &Path, context: &serde_json::Value) -> Result<usize> {
        let replacements = self.resolve_replacements(context)?;

        let mut changed = self.rewrite_contents(destination, &replacements)?;
        changed += self.rename_entries(destination, &replacements)?;

        Ok(changed)
    }

    fn resolve_replacements(
        &self,
        context: &serde_json::Value,
    ) -> Result<IndexMap<String, String>> {
        let mut resolved = IndexMap::new();
        for (token, pattern) in &self.tokens {
            let value = self.renderer.render(pattern, context)?;
            resolved.insert(token.clone(), value);
        }
        Ok(resolved)
    }

    fn rewrite_contents(
        &self,
        destination: &Path,
        replacements: &IndexMap<String, String>,
    ) -> Result<usize> {
        let mut changed = 0;
        for entry in WalkDir::new(destination) {
            let entry = entry.map_err(|e| Error::Generate(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let bytes = fs::read(entry.path()).map_err(|e| {
                Error::Generate(format!(
                    "failed to read '{}': {}",
                    entry.path().display(),
                    e
                ))
            })?;
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => continue,
            };

            let rewritten = apply_tokens(&text, replacements);
            if rewritten != text {
                debug!("Rewriting tokens in '{}'.", entry.path().display());
                fs::write(entry.path(), rewritten).map_err(|e| {
                    Error::Generate(format!(
                        "failed to write '{}': {}",
                        entry.path().display(),
                        e
                    ))
                })?;
                changed += 1;
            }
        }
        Ok(changed)
    }

    // Contents-first so children are renamed before their parent directory
    // moves under a new name.
    fn rename_entries(
        &self,
        destination: &Path,
        replacements: &IndexMap<String, String>,
    ) -> Result<usize> {
        let mut renamed = 0;
        for entry in WalkDir::new(destination).contents_first(true) {
            let entry = entry.map_err(|e| Error::Generate(e.to_string()))?;
            if entry.path() == destination {
                continue;
            }

            let name = match entry.path().file_name().and_then(OsStr::to_str) {
                Some(name) => name,
                None => continue,
            };
            let rewritten = apply_tokens(name, replacements);
            if rewritten == name {
                continue;
            }

            let new_path = entry.path().with_file_name(&rewritten);
            debug!(
                "Renaming '{}' to '{}'.",
                entry.path().display(),
                new_path.display()
            );
            fs::rename(entry.path(), &new_path).map_err(|e| {
                Error::Generate(format!(
                    "failed to rename '{}': {}",
                    entry.path().display(),
                    e
                ))
            })?;
            renamed += 1;
        }
        Ok(renamed)
    }
}

fn apply_tokens(input: &str, replacements: &IndexMap<String, String>) -> String {
    let mut output = input.to_string();
    for (token, value) in replacements {
        output = output.replace(token, value);
    }
    output
}
