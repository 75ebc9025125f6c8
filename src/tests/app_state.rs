use super::{AppState, FileMode};
use crate::tree::HeaderTreeBuilder;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_docs(dir: &TempDir, docs: &[(&str, &str)]) -> Vec<PathBuf> {
    docs.iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            path
        })
        .collect()
}

#[test]
fn test_opens_first_document_with_panel() {
    let dir = TempDir::new().unwrap();
    let files = write_docs(&dir, &[("a.md", "# Intro\n\n## Setup\n\n## Usage\n")]);

    let app = AppState::new(files, HeaderTreeBuilder::new()).unwrap();

    assert_eq!(app.file_mode, FileMode::Single);
    assert_eq!(app.entries.len(), 3);
    assert_eq!(app.entries[1].href, "#setup");
    assert_eq!(app.entries[1].tier, 1);
    assert!(app.message.is_none());
    assert!(app.document_text().starts_with("# Intro"));
}

#[test]
fn test_no_documents_is_an_error() {
    assert!(AppState::new(Vec::new(), HeaderTreeBuilder::new()).is_err());
}

#[test]
fn test_jump_scrolls_to_heading_line() {
    let dir = TempDir::new().unwrap();
    let files = write_docs(&dir, &[("a.md", "# Intro\n\ntext\n\n## Setup\n")]);
    let mut app = AppState::new(files, HeaderTreeBuilder::new()).unwrap();

    app.next_entry();
    app.jump_to_entry();
    assert_eq!(app.scroll, 4);

    // Cursor stays on the last entry.
    app.next_entry();
    assert_eq!(app.current_entry_index, 1);

    app.prev_entry();
    app.prev_entry();
    app.jump_to_entry();
    assert_eq!(app.current_entry_index, 0);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_switching_documents_rebuilds_panel() {
    let dir = TempDir::new().unwrap();
    let files = write_docs(
        &dir,
        &[("a.md", "# Alpha\n"), ("b.md", "# Beta\n## One\n## Two\n")],
    );
    let mut app = AppState::new(files, HeaderTreeBuilder::new()).unwrap();
    assert_eq!(app.file_mode, FileMode::Multi);
    assert_eq!(app.entries.len(), 1);

    app.next_entry();
    app.scroll_by(5);
    app.next_file();

    assert_eq!(app.current_file_index, 1);
    assert_eq!(app.nav.title(), Some(app.document_name()));
    assert_eq!(app.entries.len(), 3);
    assert_eq!(app.entries[0].href, "#beta");
    assert_eq!(app.current_entry_index, 0);
    assert_eq!(app.scroll, 0);

    app.next_file();
    assert_eq!(app.current_file_index, 0);
    app.prev_file();
    assert_eq!(app.current_file_index, 1);
}

#[test]
fn test_malformed_document_reports_message() {
    let dir = TempDir::new().unwrap();
    let files = write_docs(
        &dir,
        &[("a.md", "# Alpha\n"), ("b.md", "## Setup\n# Intro\n")],
    );
    let mut app = AppState::new(files, HeaderTreeBuilder::new()).unwrap();

    app.next_file();

    assert!(app.entries.is_empty());
    assert!(app
        .message
        .as_deref()
        .is_some_and(|msg| msg.contains("shallower")));
}

#[test]
fn test_scroll_saturates() {
    let dir = TempDir::new().unwrap();
    let files = write_docs(&dir, &[("a.md", "# Alpha\n")]);
    let mut app = AppState::new(files, HeaderTreeBuilder::new()).unwrap();

    app.scroll_by(-3);
    assert_eq!(app.scroll, 0);
    app.scroll_by(10);
    assert_eq!(app.scroll, 10);
}
