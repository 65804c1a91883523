#![allow(dead_code)]

use std::path::PathBuf;

use oxide_yesql::{ParseError, Queries};

pub fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("samples")
        .join(name)
}

pub fn load(name: &str) -> Queries {
    let path = sample_path(name);
    oxide_yesql::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}\nError: {e}", path.display()))
}

pub fn parse(doc: &str) -> Queries {
    oxide_yesql::parse(doc).unwrap_or_else(|e| panic!("Failed to parse: {doc}\nError: {e:?}"))
}

pub fn parse_err(doc: &str) -> ParseError {
    oxide_yesql::parse(doc)
        .expect_err(&format!("Expected parse error for: {doc}"))
}
