//! Heading records as they come out of a document query.
//!
//! A document query yields [`RawHeading`]s carrying the tag name the heading was found under.
//! Classifying a raw heading maps its tag onto a [`HeadingLevel`], and anything outside the
//! three recognized ranks is rejected rather than given an absent level.

use crate::error::NavError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Nesting tier of a heading, ordered from shallowest to deepest.
pub enum HeadingLevel {
    /// Top-level heading (`h1`, `#`).
    H1 = 1,
    /// Sub-level heading (`h2`, `##`).
    H2 = 2,
    /// Sub-sub-level heading (`h3`, `###`).
    H3 = 3,
}

impl HeadingLevel {
    /// Every recognized rank, shallowest first.
    pub const ALL: [Self; 3] = [Self::H1, Self::H2, Self::H3];

    /// Map a heading tag name (`h1`, `H2`, ...) to its level.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnrecognizedRank`] for any tag other than `h1`, `h2` or `h3`.
    pub fn from_tag(tag: &str) -> Result<Self, NavError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            _ => Err(NavError::UnrecognizedRank {
                tag: tag.to_string(),
            }),
        }
    }

    #[must_use]
    /// Level for a numeric rank, if it is one of the recognized ranks.
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.rank() == rank)
    }

    #[must_use]
    /// Numeric rank, 1 for top-level headings.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    /// Lowercase tag name this level is rendered under.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Unclassified heading element exactly as a document query found it.
pub struct RawHeading {
    /// Element tag name, mapped to a level during classification.
    pub tag: String,
    /// Anchor identifier, unique within the document.
    pub id: String,
    /// Visible heading text.
    #[serde(alias = "title")]
    pub text: String,
    /// Source line of the heading (0-indexed) when the document has lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Classified heading ready to be placed in the header tree.
pub struct HeadingRecord {
    /// Nesting tier of the heading.
    pub level: HeadingLevel,
    /// Display text.
    pub title: String,
    /// Anchor identifier linked to as `#<id>`.
    pub id: String,
    /// Source line of the heading (0-indexed), if known.
    pub line: Option<usize>,
}

impl HeadingRecord {
    #[must_use]
    /// Record without a known source line.
    pub fn new(level: HeadingLevel, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            id: id.into(),
            line: None,
        }
    }

    #[must_use]
    /// Attach the source line the heading was found on.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl TryFrom<RawHeading> for HeadingRecord {
    type Error = NavError;

    fn try_from(raw: RawHeading) -> Result<Self, Self::Error> {
        Ok(Self {
            level: HeadingLevel::from_tag(&raw.tag)?,
            title: raw.text,
            id: raw.id,
            line: raw.line,
        })
    }
}

/// Classify a whole query result, stopping at the first unrecognized rank.
///
/// # Errors
///
/// Returns [`NavError::UnrecognizedRank`] if any heading carries a tag outside `h1`–`h3`.
pub fn classify(raw: Vec<RawHeading>) -> Result<Vec<HeadingRecord>, NavError> {
    raw.into_iter().map(HeadingRecord::try_from).collect()
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
