//! Locating the documents a panel should be built for.

use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Expand files and directories into the sorted list of documents with a matching extension.
///
/// Files named explicitly are kept whatever their extension; directories are walked
/// recursively. With no paths the current directory is scanned.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(&path, extensions, &mut documents)?;
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn walk(dir: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            trace!(path = %entry.path().display(), depth = entry.depth(), "found document");
            out.push(entry.into_path());
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
