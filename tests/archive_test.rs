use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use subtheme::archive::{sanitize_entry_path, ExtractorFactory, FormatExtractorFactory};
use tempfile::TempDir;
use zip::write::FileOptions;

fn write_kit_zip(path: &Path) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer.add_directory("kit-1.0/", FileOptions::default()).unwrap();
    writer.start_file("kit-1.0/template.yml", FileOptions::default()).unwrap();
    writer.write_all(b"id: STARTERKIT_ID\n").unwrap();
    writer.start_file("kit-1.0/templates/page.html.twig", FileOptions::default()).unwrap();
    writer.write_all(b"<main></main>\n").unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_zip_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("kit.zip");
    write_kit_zip(&archive);

    let target = temp_dir.path().join("out");
    let extractor = FormatExtractorFactory.for_file(&archive).unwrap();
    extractor.extract_to(&target).unwrap();

    assert!(target.join("kit-1.0/template.yml").exists());
    assert!(target.join("kit-1.0/templates/page.html.twig").exists());
}

#[test]
fn test_tar_gz_extraction() {
    let temp_dir = TempDir::new().unwrap();
    let kit = temp_dir.path().join("kit");
    fs::create_dir_all(kit.join("templates")).unwrap();
    fs::write(kit.join("template.yml"), "id: STARTERKIT_ID\n").unwrap();
    fs::write(kit.join("templates/page.html.twig"), "<main></main>\n").unwrap();

    let archive = temp_dir.path().join("kit.tar.gz");
    let file = File::create(&archive).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.append_dir_all("kit", &kit).unwrap();
    builder.into_inner().unwrap().finish().unwrap();

    let target = temp_dir.path().join("out");
    let extractor = FormatExtractorFactory.for_file(&archive).unwrap();
    extractor.extract_to(&target).unwrap();

    assert!(target.join("kit/template.yml").exists());
    assert!(target.join("kit/templates/page.html.twig").exists());
}

#[test]
fn test_unknown_format_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("kit.rar");
    fs::write(&archive, b"junk").unwrap();

    assert!(FormatExtractorFactory.for_file(&archive).is_err());
}

#[test]
fn test_sanitize_entry_path_rejects_unsafe_inputs() {
    assert!(sanitize_entry_path("/abs/path").is_err());
    assert!(sanitize_entry_path("../escape").is_err());
    assert!(sanitize_entry_path("nested/../../escape").is_err());

    let normalized = sanitize_entry_path("nested/./file.txt").unwrap();
    assert_eq!(normalized, PathBuf::from("nested/file.txt"));
}
