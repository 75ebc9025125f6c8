use super::{slugify, MarkdownDocument, Slugger};
use crate::formats::HeadingSource;
use crate::heading::RawHeading;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing_test::traced_test;

fn query(text: &str) -> Vec<RawHeading> {
    MarkdownDocument::new("test.md", text)
        .query_headings()
        .unwrap()
}

fn summary(headings: &[RawHeading]) -> Vec<(&str, &str, &str)> {
    headings
        .iter()
        .map(|h| (h.tag.as_str(), h.id.as_str(), h.text.as_str()))
        .collect()
}

#[test]
fn test_atx_headings_in_document_order() {
    let headings = query("# Intro\n\nSome text.\n\n## Setup\n\n## Usage\n");

    assert_eq!(
        summary(&headings),
        vec![
            ("h1", "intro", "Intro"),
            ("h2", "setup", "Setup"),
            ("h2", "usage", "Usage"),
        ]
    );
    let lines: Vec<Option<usize>> = headings.iter().map(|h| h.line).collect();
    assert_eq!(lines, vec![Some(0), Some(4), Some(6)]);
}

#[test]
fn test_headings_beyond_third_rank_are_out_of_scope() {
    let headings = query("# A\n\n#### Deep\n\n##### Deeper\n\n### C\n");

    assert_eq!(
        summary(&headings),
        vec![("h1", "a", "A"), ("h3", "c", "C")]
    );
}

#[test]
#[traced_test]
fn test_skipped_deep_heading_logs_a_warning() {
    let headings = query("# A\n### C\n#### Deep\n## B\n");

    let ids: Vec<&str> = headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "b"]);
    assert!(logs_contain("heading deeper than h3 skipped"));
}

#[test]
fn test_skipped_heading_keeps_its_anchor_id() {
    let headings = query("# Usage\n\n#### Usage\n\n## Usage\n");

    let ids: Vec<&str> = headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["usage", "usage-2"]);
}

#[test]
fn test_duplicate_titles_get_suffixed_ids() {
    let headings = query("## Usage\n\n## Usage\n\n## Usage\n");

    let ids: Vec<&str> = headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["usage", "usage-1", "usage-2"]);
}

#[test]
fn test_custom_id_attribute() {
    let headings = query("# Guide\n\n## Installing things {#install}\n");

    assert_eq!(headings[1].id, "install");
    assert_eq!(headings[1].text, "Installing things");
}

#[test]
fn test_closing_sequence_is_dropped() {
    let headings = query("## Setup ##\n");

    assert_eq!(headings[0].text, "Setup");
    assert_eq!(headings[0].id, "setup");
}

#[test]
fn test_fenced_code_is_not_a_heading() {
    let headings = query("```sh\n# not a heading\n```\n\n# Real\n");

    assert_eq!(summary(&headings), vec![("h1", "real", "Real")]);
}

#[test]
fn test_document_without_headings() {
    assert!(query("Just a paragraph.\n").is_empty());
    assert!(query("").is_empty());
}

#[test]
fn test_load_names_document_after_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# Loaded\n\n## Child").unwrap();

    let doc = MarkdownDocument::load(file.path()).unwrap();

    assert_eq!(doc.name(), file.path().display().to_string());
    assert!(doc.text().starts_with("# Loaded"));
    assert_eq!(doc.query_headings().unwrap().len(), 2);
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(slugify("API v2 -- notes"), "api-v2-notes");
    assert_eq!(slugify("  snake_case stays  "), "snake_case-stays");
    assert_eq!(slugify("Ünïcode Títle"), "ünïcode-títle");
    assert_eq!(slugify("?!"), "");
}

#[test]
fn test_slugger_reserves_ids() {
    let mut slugger = Slugger::default();

    assert_eq!(slugger.slug("Intro"), "intro");
    assert_eq!(slugger.claim("intro"), "intro-1");
    assert_eq!(slugger.slug("Intro"), "intro-2");
    assert_eq!(slugger.slug("???"), "section");
    assert_eq!(slugger.slug("!!!"), "section-1");
}
