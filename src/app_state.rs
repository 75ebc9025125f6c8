//! The state behind the interactive viewer.
//!
//! The viewer shows one document next to its navigation panel. Switching documents is the
//! title change that makes the panel rebuild; selecting a panel entry scrolls the document to
//! that heading.

use crate::error::NavError;
use crate::formats::markdown::MarkdownDocument;
use crate::formats::HeadingSource;
use crate::page_nav::PageNav;
use crate::render::{self, NavEntry};
use crate::tree::HeaderTreeBuilder;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, PartialEq)]
/// Whether there are other documents to switch to.
pub enum FileMode {
    /// Only one document was given; switching does nothing.
    Single,
    /// Several documents were given; `Tab` cycles between them.
    Multi,
}

/// Viewer state: the open document, its panel, and the cursor within the panel.
pub struct AppState {
    /// Documents available to view.
    pub files: Vec<PathBuf>,
    /// Index of the open document in `files`.
    pub current_file_index: usize,
    /// Controls whether document switching is available.
    pub file_mode: FileMode,
    /// Navigation panel for the open document.
    pub nav: PageNav<MarkdownDocument>,
    /// Panel entries of the current tree, parent before children.
    pub entries: Vec<NavEntry>,
    /// Selected panel entry.
    pub current_entry_index: usize,
    /// First document line shown in the document pane.
    pub scroll: u16,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    /// Open the first of `files` and build its panel.
    ///
    /// A panel that fails to build is reported in `message` rather than returned.
    ///
    /// # Errors
    ///
    /// Returns an error if `files` is empty or the first document cannot be read.
    pub fn new(files: Vec<PathBuf>, builder: HeaderTreeBuilder) -> Result<Self, NavError> {
        let first = files
            .first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no documents to view"))?;
        let document = MarkdownDocument::load(first)?;
        let file_mode = if files.len() == 1 {
            FileMode::Single
        } else {
            FileMode::Multi
        };

        let mut app = Self {
            files,
            current_file_index: 0,
            file_mode,
            nav: PageNav::new(document).with_builder(builder),
            entries: Vec::new(),
            current_entry_index: 0,
            scroll: 0,
            message: None,
        };
        app.refresh();
        Ok(app)
    }

    /// Fire the title trigger for the open document and reset the panel cursor.
    fn refresh(&mut self) {
        let title = self.nav.source().name().to_string();
        match self.nav.set_title(&title) {
            Ok(_) => {
                self.entries = render::entries(self.nav.headers(), 0);
                self.message = None;
            }
            Err(e) => {
                self.entries.clear();
                self.message = Some(format!("Error: {e}"));
            }
        }
        self.current_entry_index = 0;
        self.scroll = 0;
    }

    /// Switch to the document at `index` in `files`.
    pub fn open_file(&mut self, index: usize) {
        let Some(path) = self.files.get(index) else {
            return;
        };
        match MarkdownDocument::load(path) {
            Ok(document) => {
                debug!(path = %path.display(), "opening document");
                self.current_file_index = index;
                self.nav.replace_source(document);
                self.refresh();
            }
            Err(e) => self.message = Some(format!("Error: {e}")),
        }
    }

    /// Cycle forward to the next document.
    pub fn next_file(&mut self) {
        if self.file_mode == FileMode::Multi {
            self.open_file((self.current_file_index + 1) % self.files.len());
        }
    }

    /// Cycle back to the previous document.
    pub fn prev_file(&mut self) {
        if self.file_mode == FileMode::Multi {
            let len = self.files.len();
            self.open_file((self.current_file_index + len - 1) % len);
        }
    }

    /// Move the panel cursor down one entry.
    pub fn next_entry(&mut self) {
        if self.current_entry_index + 1 < self.entries.len() {
            self.current_entry_index += 1;
        }
    }

    /// Move the panel cursor up one entry.
    pub fn prev_entry(&mut self) {
        self.current_entry_index = self.current_entry_index.saturating_sub(1);
    }

    /// Scroll the document pane so the selected heading is the first line shown.
    pub fn jump_to_entry(&mut self) {
        if let Some(line) = self
            .entries
            .get(self.current_entry_index)
            .and_then(|entry| entry.line)
        {
            self.scroll = u16::try_from(line).unwrap_or(u16::MAX);
        }
    }

    /// Scroll the document pane by `delta` lines.
    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    #[must_use]
    /// Markdown source of the open document.
    pub fn document_text(&self) -> &str {
        self.nav.source().text()
    }

    #[must_use]
    /// Name of the open document.
    pub fn document_name(&self) -> &str {
        self.nav.source().name()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
