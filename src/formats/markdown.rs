//! Markdown documents queried for headings using tree-sitter-md.
//!
//! This module provides the tree-sitter query selecting ATX-style headings (# syntax) and
//! assigns each heading a GitHub-style anchor id. Only the three navigable ranks are returned;
//! deeper headings still take their anchor id, as they do on the rendered page, then are
//! skipped with a warning.

use crate::error::NavError;
use crate::formats::{Format, HeadingSource};
use crate::heading::{HeadingLevel, RawHeading};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Tree-sitter query for ATX-style markdown headings of every rank.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        r"(atx_heading
            [(atx_h1_marker) (atx_h2_marker) (atx_h3_marker)
             (atx_h4_marker) (atx_h5_marker) (atx_h6_marker)] @marker) @heading"
    }
}

/// A markdown document held in memory.
pub struct MarkdownDocument {
    name: String,
    text: String,
}

impl MarkdownDocument {
    #[must_use]
    /// Wrap markdown text under the given document name.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a markdown file, naming the document after its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }

    #[must_use]
    /// The markdown source.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl HeadingSource for MarkdownDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn query_headings(&self) -> Result<Vec<RawHeading>, NavError> {
        let format = MarkdownFormat;
        let language = format.language();

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| NavError::Language(e.to_string()))?;
        let tree = parser
            .parse(&self.text, None)
            .ok_or_else(|| NavError::Parse {
                name: self.name.clone(),
            })?;

        let query = Query::new(&language, format.heading_query())
            .map_err(|e| NavError::Query(e.to_string()))?;
        let capture_index = |name: &str| {
            query
                .capture_index_for_name(name)
                .ok_or_else(|| NavError::Query(format!("missing @{name} capture")))
        };
        let heading_index = capture_index("heading")?;
        let marker_index = capture_index("marker")?;

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), self.text.as_bytes());
        let mut slugger = Slugger::default();
        let mut headings = Vec::new();

        while let Some(query_match) = matches.next() {
            let mut heading = None;
            let mut marker = None;
            for capture in query_match.captures {
                if capture.index == heading_index {
                    heading = Some(capture.node);
                } else if capture.index == marker_index {
                    marker = Some(capture.node);
                }
            }
            let (Some(heading), Some(marker)) = (heading, marker) else {
                continue;
            };
            let Some(tag) = marker_tag(marker.kind()) else {
                continue;
            };

            let (title, custom_id) = split_custom_id(heading_title(heading, &self.text));
            let id = match custom_id {
                Some(id) => slugger.claim(id),
                None => slugger.slug(title),
            };
            let line = heading.start_position().row;
            if HeadingLevel::from_tag(tag).is_err() {
                warn!(document = %self.name, line, tag, %id, "heading deeper than h3 skipped");
                continue;
            }
            trace!(tag, %id, line, "heading");

            headings.push(RawHeading {
                tag: tag.to_string(),
                id,
                text: title.to_string(),
                line: Some(line),
            });
        }

        debug!(document = %self.name, headings = headings.len(), "queried markdown headings");
        Ok(headings)
    }
}

/// `atx_h2_marker` -> `h2`
fn marker_tag(kind: &str) -> Option<&str> {
    kind.strip_prefix("atx_")?.strip_suffix("_marker")
}

/// Heading text without the optional closing sequence of `#`s.
fn heading_title<'a>(heading: Node<'_>, text: &'a str) -> &'a str {
    let mut walker = heading.walk();
    let content = heading
        .children(&mut walker)
        .find(|child| child.kind() == "inline")
        .and_then(|child| text.get(child.byte_range()))
        .map_or("", str::trim);

    let closed = content.trim_end_matches('#');
    if closed.len() < content.len() && (closed.is_empty() || closed.ends_with(char::is_whitespace))
    {
        closed.trim_end()
    } else {
        content
    }
}

/// Split a trailing `{#custom-id}` attribute off a heading title.
fn split_custom_id(title: &str) -> (&str, Option<&str>) {
    let Some(body) = title.strip_suffix('}') else {
        return (title, None);
    };
    let Some(open) = body.rfind("{#") else {
        return (title, None);
    };
    let id = &body[open + 2..];
    if id.is_empty() || id.contains(char::is_whitespace) {
        return (title, None);
    }
    (body[..open].trim_end(), Some(id))
}

#[must_use]
/// GitHub-style anchor slug: lowercase, spaces and hyphens collapse to one `-`, other
/// punctuation is dropped.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }
    out
}

#[derive(Default)]
/// Hands out anchor ids that are unique within one document.
pub struct Slugger {
    used: HashSet<String>,
}

impl Slugger {
    /// Slug for a heading title, suffixed with `-1`, `-2`, ... when already taken.
    pub fn slug(&mut self, title: &str) -> String {
        let base = slugify(title);
        if base.is_empty() {
            self.claim("section")
        } else {
            self.claim(&base)
        }
    }

    /// Reserve an explicit id, suffixing it if an earlier heading already uses it.
    pub fn claim(&mut self, id: &str) -> String {
        if self.used.insert(id.to_string()) {
            return id.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{id}-{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
