use super::JsonHeadings;
use crate::error::NavError;
use crate::formats::HeadingSource;
use crate::heading::classify;
use crate::tree::build_header_tree;
use std::io::Write;
use tempfile::NamedTempFile;

const DUMP: &str = r#"[
    {"tag": "H1", "id": "intro", "text": "Intro"},
    {"tag": "H2", "id": "setup", "title": "Setup", "line": 3},
    {"tag": "H2", "id": "usage", "text": "Usage"}
]"#;

#[test]
fn test_dump_builds_tree() {
    let source = JsonHeadings::from_str("page", DUMP).unwrap();

    let records = classify(source.query_headings().unwrap()).unwrap();
    let tree = build_header_tree(&records).unwrap();

    assert_eq!(source.name(), "page");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 2);
    assert_eq!(tree[0].children[0].title, "Setup");
    assert_eq!(tree[0].children[0].line, Some(3));
}

#[test]
fn test_unrecognized_tag_surfaces_on_classify() {
    let source =
        JsonHeadings::from_str("page", r#"[{"tag": "H4", "id": "x", "text": "X"}]"#).unwrap();

    let err = classify(source.query_headings().unwrap()).unwrap_err();

    assert!(matches!(err, NavError::UnrecognizedRank { tag } if tag == "H4"));
}

#[test]
fn test_invalid_json_is_an_error() {
    let err = JsonHeadings::from_str("page", "{\"tag\": \"h1\"}").err().unwrap();

    assert!(matches!(err, NavError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{DUMP}").unwrap();

    let source = JsonHeadings::load(file.path()).unwrap();

    assert_eq!(source.query_headings().unwrap().len(), 3);
}
