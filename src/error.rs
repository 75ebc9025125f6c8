//! Error outcomes for heading classification, tree building and document queries.
//!
//! A malformed heading sequence is never repaired or dropped: each way it can go wrong has its
//! own variant naming the offending heading.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong between querying a document and rendering its panel.
pub enum NavError {
    /// A heading tag outside the three recognized ranks.
    #[error("unrecognized heading rank `{tag}` (expected h1, h2 or h3)")]
    UnrecognizedRank {
        /// The tag name as it was found in the document.
        tag: String,
    },
    /// A deeper heading appeared before any heading it could be nested under.
    #[error("heading {index} (level {level}) has no preceding heading to nest under")]
    OrphanedHeading {
        /// Position of the heading in document order.
        index: usize,
        /// Rank of the orphaned heading.
        level: u8,
    },
    /// A heading shallower than the root level was left over after building the tree.
    #[error("heading {index} (level {level}) is shallower than the root level {base}")]
    MalformedSequence {
        /// Position of the first unconsumed heading.
        index: usize,
        /// Rank of the unconsumed heading.
        level: u8,
        /// Rank the tree was rooted at.
        base: u8,
    },
    /// The tree-sitter grammar could not be loaded.
    #[error("failed to load grammar: {0}")]
    Language(String),
    /// The heading query failed to compile against the grammar.
    #[error("invalid heading query: {0}")]
    Query(String),
    /// The parser gave up without producing a syntax tree.
    #[error("failed to parse {name}")]
    Parse {
        /// Name of the document being parsed.
        name: String,
    },
    /// Reading a document or heading dump failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A heading dump was not valid JSON or could not be serialised.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
