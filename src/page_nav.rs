//! The navigation panel's state, rebuilt whenever the page title changes.
//!
//! The panel holds one derived value, the header tree, computed from its document source.
//! A title change is the only trigger: it re-queries the document and replaces the tree
//! wholesale. Setting the same title again does nothing.

use crate::error::NavError;
use crate::formats::HeadingSource;
use crate::heading::classify;
use crate::render::NavRenderer;
use crate::tree::{HeaderNode, HeaderTreeBuilder};
use tracing::{debug, warn};

/// Header tree for a document, kept in step with the page title.
pub struct PageNav<S> {
    source: S,
    builder: HeaderTreeBuilder,
    title: Option<String>,
    headers: Vec<HeaderNode>,
}

impl<S: HeadingSource> PageNav<S> {
    #[must_use]
    /// Panel over `source` with no title set and an empty tree.
    pub fn new(source: S) -> Self {
        Self {
            source,
            builder: HeaderTreeBuilder::new(),
            title: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    /// Use a differently configured tree builder for subsequent rebuilds.
    pub fn with_builder(mut self, builder: HeaderTreeBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// React to the page title: rebuild the tree if the title differs from the last one.
    ///
    /// Returns whether a rebuild happened. On failure the previous tree and title are kept, so
    /// firing the same title again retries the rebuild.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be queried or its headings do not form a tree.
    pub fn set_title(&mut self, title: &str) -> Result<bool, NavError> {
        if self.title.as_deref() == Some(title) {
            return Ok(false);
        }

        match self.build() {
            Ok(headers) => {
                debug!(
                    title,
                    document = self.source.name(),
                    roots = headers.len(),
                    "rebuilt page nav"
                );
                self.headers = headers;
                self.title = Some(title.to_string());
                Ok(true)
            }
            Err(e) => {
                warn!(
                    title,
                    document = self.source.name(),
                    error = %e,
                    "page nav rebuild failed"
                );
                Err(e)
            }
        }
    }

    fn build(&self) -> Result<Vec<HeaderNode>, NavError> {
        let records = classify(self.source.query_headings()?)?;
        self.builder.build(&records)
    }

    /// Swap the document behind the panel. The current tree stays until the next title change.
    pub fn replace_source(&mut self, source: S) {
        self.source = source;
        self.title = None;
    }

    #[must_use]
    /// Root headers of the current tree.
    pub fn headers(&self) -> &[HeaderNode] {
        &self.headers
    }

    #[must_use]
    /// Title the current tree was built for.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    /// Document the panel queries.
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    /// Plain-text outline of the current tree, `None` when there is nothing to show.
    pub fn render_text(&self, renderer: &NavRenderer) -> Option<String> {
        renderer.render_text(&self.headers)
    }
}

#[cfg(test)]
#[path = "tests/page_nav.rs"]
mod tests;
