use super::find_documents;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_directories_are_walked_for_extensions() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("notes.txt"), "nope").unwrap();
    fs::create_dir(dir.path().join("guide")).unwrap();
    fs::write(dir.path().join("guide").join("a.MD"), "# A").unwrap();

    let docs = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(
        docs,
        vec![dir.path().join("b.md"), dir.path().join("guide").join("a.MD")]
    );
}

#[test]
fn test_explicit_files_are_kept() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("README.txt");
    fs::write(&file, "# Readme").unwrap();

    let docs = find_documents(vec![file.clone(), file.clone()], &["md".to_string()]).unwrap();

    assert_eq!(docs, vec![file]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = find_documents(vec![dir.path().join("missing.md")], &["md".to_string()]).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_nested_directories_are_walked_to_any_depth() {
    let dir = TempDir::new().unwrap();
    let deep = dir.path().join("a").join("b").join("c");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("deep.md"), "# Deep").unwrap();
    fs::create_dir(dir.path().join("a").join("empty.md")).unwrap();
    fs::write(dir.path().join("a").join("top.md"), "# Top").unwrap();

    let docs = find_documents(vec![dir.path().join("a")], &["md".to_string()]).unwrap();

    assert_eq!(
        docs,
        vec![deep.join("deep.md"), dir.path().join("a").join("top.md")]
    );
}
