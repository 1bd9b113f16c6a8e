//! Configuration handling for the subtheme command.
//! This module loads the optional site-level configuration file that
//! overrides the built-in scaffold defaults.

use crate::constants::{CONFIG_FILES, DEFAULT_BASE_THEME, DEFAULT_DESTINATION};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Site-level settings, all optional in the file.
///
/// `destination` and token values are MiniJinja patterns rendered against the
/// scaffold context before use.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base theme whose bundled starter kit is the default source
    pub base_theme: Option<String>,
    /// Starter-kit location used when the command line passes none
    pub source: Option<String>,
    /// Destination pattern relative to the site root
    pub destination: Option<String>,
    /// Placeholder token map, token to replacement pattern, in file order
    pub tokens: Option<IndexMap<String, String>>,
}

impl Settings {
    /// Loads settings from the site root, trying multiple file formats.
    /// Supports: subtheme.json, subtheme.yml, subtheme.yaml
    ///
    /// Returns default settings when no configuration file exists.
    ///
    /// # Errors
    /// * `Error::Config` if a present file fails to parse
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        for file in CONFIG_FILES {
            let config_path = root.as_ref().join(file);
            if !config_path.exists() {
                continue;
            }
            debug!("Loading configuration from {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path).map_err(Error::Io)?;
            return if file.ends_with(".json") {
                serde_json::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
            } else {
                serde_yaml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))
            };
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// The base theme to consult for a bundled starter kit.
    pub fn base_theme(&self) -> &str {
        self.base_theme.as_deref().unwrap_or(DEFAULT_BASE_THEME)
    }

    /// The destination pattern for the generated theme.
    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or(DEFAULT_DESTINATION)
    }

    /// The placeholder token map, falling back to the built-in tokens.
    pub fn tokens(&self) -> IndexMap<String, String> {
        self.tokens.clone().unwrap_or_else(default_tokens)
    }
}

/// Built-in placeholder tokens rewritten by the generator.
pub fn default_tokens() -> IndexMap<String, String> {
    IndexMap::from([
        ("STARTERKIT_LABEL".to_string(), "{{ name }}".to_string()),
        ("STARTERKIT_ID".to_string(), "{{ machine_name }}".to_string()),
    ])
}
