//! subtheme scaffolds a new sub-theme from a starter kit.
//! It locates or downloads a starter-kit template, unpacks it when needed,
//! mirrors it into the site's theme directory and rewrites placeholder
//! tokens inside the copied files.

/// Archive extraction components and their format factory
pub mod archive;

/// Command-line interface module for the subtheme application
pub mod cli;

/// Configuration handling for the subtheme command
/// Supports JSON and YAML formats (subtheme.json, subtheme.yml, subtheme.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the subtheme application
pub mod error;

/// Artifact download and local copy into the workspace
pub mod fetch;

/// Token substitution inside the generated theme
pub mod generator;

/// File and directory ignore patterns
/// Processes .subthemeignore files to exclude specific paths
pub mod ignore;

/// Directory mirroring and top-level-directory collapse
pub mod mirror;

/// Machine-name derivation from human-readable labels
pub mod naming;

/// The ordered scaffold pipeline and its state
pub mod pipeline;

/// User input and interaction handling
pub mod prompt;

/// Pattern rendering with MiniJinja
pub mod renderer;

/// Starter-kit source classification
pub mod source;

/// Installed theme path resolution
pub mod theme;
