//! Tests for the CLI command implementations.

use std::io::Write;
use std::path::PathBuf;

use oxide_yesql::YesqlError;
use oxide_yesql_cli::{OutputFormat, check, list, show};
use tempfile::NamedTempFile;

const QUERIES: &str = "\
-- name: simple
-- raw: 1
SELECT * FROM simple;

-- name: multiline
SELECT *
FROM multiline
WHERE line = 42;
";

fn query_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_check_text() {
    let file = query_file(QUERIES);
    let files = vec![file.path().to_path_buf()];
    let output = run(|out| check(&files, OutputFormat::Text, out));
    assert_eq!(output, format!("{}: 2 queries\n", file.path().display()));
}

#[test]
fn test_check_json() {
    let file = query_file(QUERIES);
    let files = vec![file.path().to_path_buf()];
    let output = run(|out| check(&files, OutputFormat::Json, out));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["queries"], 2);
}

#[test]
fn test_check_stops_on_invalid_file() {
    let good = query_file(QUERIES);
    let bad = query_file("SELECT 1;\n");
    let files: Vec<PathBuf> = vec![good.path().into(), bad.path().into()];

    let mut out = Vec::new();
    let err = check(&files, OutputFormat::Text, &mut out).unwrap_err();
    assert!(err.to_string().contains("line 1"));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}: 2 queries\n", good.path().display())
    );
}

#[test]
fn test_check_json_writes_nothing_on_failure() {
    let good = query_file(QUERIES);
    let bad = query_file("-- raw: 1\n");
    let files: Vec<PathBuf> = vec![good.path().into(), bad.path().into()];

    let mut out = Vec::new();
    assert!(check(&files, OutputFormat::Json, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_list_text() {
    let file = query_file(QUERIES);
    let output = run(|out| list(file.path(), OutputFormat::Text, out));
    assert_eq!(output, "multiline\nsimple [raw=1]\n");
}

#[test]
fn test_list_json() {
    let file = query_file(QUERIES);
    let output = run(|out| list(file.path(), OutputFormat::Json, out));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["simple"]["text"], "SELECT * FROM simple;");
    assert_eq!(value["simple"]["tags"]["raw"], "1");
    assert!(value["multiline"].get("tags").is_none());
}

#[test]
fn test_show() {
    let file = query_file(QUERIES);
    let output = run(|out| show(file.path(), "multiline", OutputFormat::Text, out));
    assert_eq!(output, "SELECT * FROM multiline WHERE line = 42;\n");
}

#[test]
fn test_show_missing_query() {
    let file = query_file(QUERIES);
    let err = show(file.path(), "nope", OutputFormat::Text, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<YesqlError>(),
        Some(YesqlError::QueryNotFound(name)) if name == "nope"
    ));
}
