//! Tests for parsing the sample query files.

mod common;
use common::*;

use oxide_yesql::{LineKind, ParseError, Query, YesqlError};

#[test]
fn valid_sample() {
    let queries = load("valid.sql");

    let expected = [
        ("simple", "SELECT * FROM simple;"),
        ("multiline", "SELECT * FROM multiline WHERE line = 42;"),
        ("comments", "SELECT * FROM comments;"),
    ];
    assert_eq!(queries.len(), expected.len());
    for (name, text) in expected {
        assert_eq!(queries.get(name).map(Query::text), Some(text), "query {name}");
    }

    let simple = queries.get("simple").unwrap();
    assert_eq!(simple.tags().len(), 1);
    assert_eq!(simple.tag("raw"), Some("1"));
    assert!(queries.get("multiline").unwrap().tags().is_empty());
    assert!(queries.get("comments").unwrap().tags().is_empty());
}

#[test]
fn annotated_sample() {
    let queries = load("annotated.sql");
    assert_eq!(
        queries.names().collect::<Vec<_>>(),
        ["count-users", "get-user", "insert-user"]
    );

    let get_user = queries.get("get-user").unwrap();
    assert_eq!(
        get_user.text(),
        "SELECT id, username, email FROM users WHERE id = ?;"
    );
    assert_eq!(get_user.tag("db"), Some("replica"));
    assert_eq!(get_user.tag("timeout"), Some("00:00:05"));

    let insert_user = queries.get("insert-user").unwrap();
    assert_eq!(
        insert_user.text(),
        "INSERT INTO users (username, email) VALUES (?, ?) RETURNING id;"
    );
    assert!(insert_user.tags().is_empty());
}

#[test]
fn tag_missing_sample() {
    let err = oxide_yesql::parse_file(sample_path("tag_missing.sql")).unwrap_err();
    assert!(matches!(
        err,
        YesqlError::Parse(ParseError::MissingName {
            line: 1,
            kind: LineKind::Tag
        })
    ));
}

#[test]
fn tag_doubloon_sample() {
    let err = oxide_yesql::parse_file(sample_path("tag_doubloon.sql")).unwrap_err();
    let err = match err {
        YesqlError::Parse(err) => err,
        other => panic!("Expected parse error, got {other:?}"),
    };
    assert_eq!(
        err,
        ParseError::DuplicateName {
            name: "doubloon".to_string(),
            line: 4,
            first_line: 1,
        }
    );
}

#[test]
fn duplicate_then_renamed() {
    let doc = "-- name: a\nSELECT 1;\n-- name: a\nSELECT 2;\n";
    assert!(matches!(parse_err(doc), ParseError::DuplicateName { .. }));

    let fixed = parse(&doc.replacen("-- name: a\nSELECT 2", "-- name: b\nSELECT 2", 1));
    assert_eq!(fixed.get("a").unwrap().text(), "SELECT 1;");
    assert_eq!(fixed.get("b").unwrap().text(), "SELECT 2;");
}

#[test]
fn statement_before_name() {
    assert_eq!(
        parse_err("SELECT 1;"),
        ParseError::MissingName {
            line: 1,
            kind: LineKind::Statement
        }
    );
}

#[test]
fn error_messages_name_the_line() {
    assert_eq!(
        parse_err("\n\nSELECT 1;").to_string(),
        "line 3: statement found before any '-- name:' declaration"
    );
    assert_eq!(
        parse_err("-- name: x\n-- name: x").to_string(),
        "line 2: duplicate query name 'x' (first declared on line 1)"
    );
}

#[test]
fn blank_and_comment_only_document() {
    assert!(parse("").is_empty());
    assert!(parse("   \n\t\n-- nothing to see\n--\n").is_empty());
}

#[test]
fn reparse_is_idempotent() {
    assert_eq!(load("valid.sql"), load("valid.sql"));
}
