//! Machine-name derivation for generated themes.

use regex::Regex;
use std::sync::OnceLock;

static NON_MACHINE_RUN: OnceLock<Regex> = OnceLock::new();

/// Derives the identifier-safe machine name from a human-readable label.
///
/// The label is Unicode-lowercased, then every maximal run of characters
/// outside `[a-z0-9_]` collapses to a single underscore. Leading and trailing
/// underscores are kept as produced. Empty input yields empty output.
///
/// # Example
/// ```
/// use subtheme::naming::machine_name;
/// assert_eq!(machine_name("My Theme!!"), "my_theme_");
/// ```
pub fn machine_name(label: &str) -> String {
    let pattern = NON_MACHINE_RUN.get_or_init(|| Regex::new("[^a-z0-9_]+").unwrap());
    pattern.replace_all(&label.to_lowercase(), "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_name_collapses_runs() {
        assert_eq!(machine_name("My Theme!!"), "my_theme_");
        assert_eq!(machine_name("a--b"), "a_b");
    }

    #[test]
    fn test_machine_name_keeps_existing_underscores() {
        assert_eq!(machine_name("__Already_Safe__"), "__already_safe__");
    }
}
