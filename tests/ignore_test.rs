use std::fs::File;
use std::io::Write;

use subtheme::constants::IGNORE_FILE;
use subtheme::ignore::load_ignore_patterns;
use tempfile::TempDir;

#[test]
fn test_load_ignore_patterns() {
    let temp_dir = TempDir::new().unwrap();

    // Test without .subthemeignore
    let glob_set = load_ignore_patterns(temp_dir.path()).unwrap();
    assert!(glob_set.is_match(".git")); // Default pattern
    assert!(glob_set.is_match(".git/HEAD"));
    assert!(glob_set.is_match(IGNORE_FILE));

    // Test with .subthemeignore
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "# editor litter\n*.swp\n\nnode_modules/**").unwrap();

    let glob_set = load_ignore_patterns(temp_dir.path()).unwrap();
    assert!(glob_set.is_match("buffer.swp"));
    assert!(glob_set.is_match("node_modules/left-pad/index.js"));
    assert!(glob_set.is_match(".git")); // Default pattern still works
    assert!(!glob_set.is_match("template.yml"));
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "a{{b").unwrap();

    assert!(load_ignore_patterns(temp_dir.path()).is_err());
}
