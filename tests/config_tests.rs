//! Loading colour files from disk.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use tint::config::{load_table, ColourFile, DEFAULT_FILE};
use tint::{validate_colour_file, TintError};

#[test]
fn discover_finds_default_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_FILE), "colours:\n  brand: \"#ff00ff\"\n").unwrap();

    let file = ColourFile::discover(dir.path()).unwrap().unwrap();
    assert_eq!(file.colours.get("brand").map(String::as_str), Some("#ff00ff"));
}

#[test]
fn discover_without_file() {
    let dir = tempdir().unwrap();
    assert_eq!(ColourFile::discover(dir.path()).unwrap(), None);
}

#[test]
fn json_by_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("colours.json");
    fs::write(&path, r##"{"colours": {"ink": "#1A1A2E"}}"##).unwrap();

    let table = load_table(Some(&path)).unwrap();
    assert_eq!(table.named("ink").unwrap().hex(), "#1A1A2E");
    assert_eq!(table.named("red").unwrap().hex(), "#FF0000");
}

#[test]
fn explicit_file_overrides_builtins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.yaml");
    fs::write(&path, "colours:\n  red: \"#AA0000\"\n").unwrap();

    let table = load_table(Some(&path)).unwrap();
    assert_eq!(table.resolve("red").hex(), "#AA0000");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    assert!(matches!(load_table(Some(&path)), Err(TintError::Io { .. })));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "colours: [not, a, map]\n").unwrap();
    assert!(matches!(ColourFile::load(&path), Err(TintError::Parse { .. })));
}

#[test]
fn validate_loaded_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_FILE);
    fs::write(&path, "colours:\n  ok: \"#123\"\n  broken: \"#12345678901\"\n").unwrap();

    let result = validate_colour_file(&ColourFile::load(&path).unwrap());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.sorted()[0].colour.as_deref(), Some("broken"));
}
