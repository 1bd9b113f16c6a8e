//! Common constants used throughout the subtheme application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["subtheme.json", "subtheme.yml", "subtheme.yaml"];

/// Per-starter-kit ignore file name
pub const IGNORE_FILE: &str = ".subthemeignore";

/// Destination pattern, rendered against the scaffold context
pub const DEFAULT_DESTINATION: &str = "themes/custom/{{ machine_name }}";

/// Base theme consulted when no starter kit source is configured
pub const DEFAULT_BASE_THEME: &str = "starterkit";

/// Directory inside a base theme that holds its bundled starter kit
pub const STARTERKIT_DIR: &str = "starterkit";

/// Workspace subdirectory that receives the packed artifact
pub const PACK_DIR: &str = "pack";

/// Workspace subdirectory that receives the extracted or cloned template
pub const RECIPE_DIR: &str = "recipe";

/// Theme directories scanned by the filesystem theme resolver, relative to
/// the site root
pub const THEME_DIRS: [&str; 3] = ["themes/custom", "themes/contrib", "core/themes"];
