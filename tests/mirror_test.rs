use std::fs;

use globset::GlobSet;
use subtheme::ignore::load_ignore_patterns;
use subtheme::mirror::{collapse_top_level, mirror};
use tempfile::TempDir;

#[test]
fn test_collapse_single_subdirectory() {
    let temp_dir = TempDir::new().unwrap();
    let wrapper = temp_dir.path().join("kit-1.0");
    fs::create_dir(&wrapper).unwrap();
    fs::write(wrapper.join("template.yml"), "id: STARTERKIT_ID\n").unwrap();

    let resolved = collapse_top_level(temp_dir.path()).unwrap();
    assert_eq!(resolved, wrapper);
}

#[test]
fn test_collapse_with_two_entries_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("a")).unwrap();
    fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

    let resolved = collapse_top_level(temp_dir.path()).unwrap();
    assert_eq!(resolved, temp_dir.path());
}

#[test]
fn test_collapse_with_single_file_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("only.txt"), "only").unwrap();

    let resolved = collapse_top_level(temp_dir.path()).unwrap();
    assert_eq!(resolved, temp_dir.path());
}

#[test]
fn test_collapse_of_empty_directory_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();

    let resolved = collapse_top_level(temp_dir.path()).unwrap();
    assert_eq!(resolved, temp_dir.path());
}

#[test]
fn test_mirror_copies_nested_tree() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("template.yml"), "name: kit\n").unwrap();
    fs::create_dir_all(source.path().join("templates/blocks")).unwrap();
    fs::write(source.path().join("templates/page.html.twig"), "<main/>").unwrap();
    fs::write(source.path().join("templates/blocks/nav.html.twig"), "<nav/>").unwrap();

    let target = TempDir::new().unwrap();
    let dest = target.path().join("my_theme");
    let copied = mirror(source.path(), &dest, &GlobSet::empty()).unwrap();

    assert_eq!(copied, 3);
    assert!(!dir_diff::is_different(source.path(), &dest).unwrap());
}

#[test]
fn test_mirror_overwrites_and_keeps_unrelated_files() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("style.css"), "body {}").unwrap();

    let target = TempDir::new().unwrap();
    let dest = target.path().join("my_theme");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("style.css"), "stale").unwrap();
    fs::write(dest.join("notes.txt"), "keep me").unwrap();

    mirror(source.path(), &dest, &GlobSet::empty()).unwrap();

    assert_eq!(fs::read_to_string(dest.join("style.css")).unwrap(), "body {}");
    assert_eq!(fs::read_to_string(dest.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_mirror_skips_ignored_entries() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("template.yml"), "name: kit\n").unwrap();
    fs::create_dir(source.path().join(".git")).unwrap();
    fs::write(source.path().join(".git/HEAD"), "ref").unwrap();
    fs::write(source.path().join(".subthemeignore"), "*.swp\n").unwrap();
    fs::write(source.path().join("buffer.swp"), "junk").unwrap();

    let ignored = load_ignore_patterns(source.path()).unwrap();
    let target = TempDir::new().unwrap();
    let dest = target.path().join("my_theme");
    mirror(source.path(), &dest, &ignored).unwrap();

    assert!(dest.join("template.yml").exists());
    assert!(!dest.join(".git").exists());
    assert!(!dest.join(".subthemeignore").exists());
    assert!(!dest.join("buffer.swp").exists());
}
