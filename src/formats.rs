//! Document sources that can be queried for their headings.
//!
//! This module defines the `HeadingSource` trait, the query boundary the navigation panel is
//! built from, and the `Format` trait which abstracts over tree-sitter grammars by providing
//! the heading query specific to each document format.

pub mod json;
pub mod markdown;

use crate::error::NavError;
use crate::heading::RawHeading;

/// Tree-sitter grammar and heading query for one document format.
pub trait Format {
    /// Grammar the document is parsed with.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the headings within the navigation scope.
    fn heading_query(&self) -> &str;
}

/// A document that can report its headings in document order.
pub trait HeadingSource {
    /// Name the document is known by, used as its page title.
    fn name(&self) -> &str;

    /// Query the document for heading elements within the navigation scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    fn query_headings(&self) -> Result<Vec<RawHeading>, NavError>;
}
