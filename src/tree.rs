//! Header tree construction from a flat, document-ordered heading sequence.
//!
//! Headings arrive in the order they appear on the page, not grouped by level. The builder
//! walks them with an explicit index cursor: each recursive call builds the run of siblings
//! at one level and hands back the index of the first heading it did not consume, so no two
//! calls share a mutable view of the sequence.

use crate::error::NavError;
use crate::heading::{HeadingLevel, HeadingRecord};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A heading together with the headings nested beneath it.
pub struct HeaderNode {
    /// Nesting tier of this heading.
    pub level: HeadingLevel,
    /// Display text.
    pub title: String,
    /// Anchor identifier.
    pub id: String,
    /// Source line of the heading (0-indexed), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Sub-headers in document order, all at a deeper level than this node.
    pub children: Vec<HeaderNode>,
}

impl HeaderNode {
    #[must_use]
    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(HeaderNode::count).sum::<usize>()
    }

    #[must_use]
    /// Number of tiers in this subtree, 1 for a leaf.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HeaderNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl From<&HeadingRecord> for HeaderNode {
    fn from(record: &HeadingRecord) -> Self {
        Self {
            level: record.level,
            title: record.title.clone(),
            id: record.id.clone(),
            line: record.line,
            children: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Turns flat heading records into a nested header tree.
///
/// By default the first heading in the document sets the root level, so a page whose first
/// heading is an `h2` is rooted at `h2`. Pinning a root level with [`Self::with_root`] makes
/// any heading deeper than the root that appears before a root-level heading an error.
///
/// Deeper headings are nested under the most recent shallower heading without requiring
/// every intermediate level: an `h3` directly after an `h1` becomes a child of that `h1`.
pub struct HeaderTreeBuilder {
    root: Option<HeadingLevel>,
}

impl HeaderTreeBuilder {
    #[must_use]
    /// Builder that roots the tree at the level of the first heading.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Root the tree at a fixed level instead of the first heading's level.
    pub fn with_root(mut self, level: HeadingLevel) -> Self {
        self.root = Some(level);
        self
    }

    #[must_use]
    /// The pinned root level, if any.
    pub fn root(self) -> Option<HeadingLevel> {
        self.root
    }

    /// Build the root-level nodes for `records`, preserving document order at every tier.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::OrphanedHeading`] if a heading deeper than the root comes before
    /// any root-level heading, and [`NavError::MalformedSequence`] if a heading shallower than
    /// the root level is found.
    pub fn build(self, records: &[HeadingRecord]) -> Result<Vec<HeaderNode>, NavError> {
        let Some(first) = records.first() else {
            return Ok(Vec::new());
        };
        let base = self.root.unwrap_or(first.level);

        let (roots, next) = build_level(records, 0, base)?;
        if let Some(rest) = records.get(next) {
            return Err(NavError::MalformedSequence {
                index: next,
                level: rest.level.rank(),
                base: base.rank(),
            });
        }

        debug!(
            headings = roots.iter().map(HeaderNode::count).sum::<usize>(),
            roots = roots.len(),
            depth = roots.iter().map(HeaderNode::depth).max().unwrap_or(0),
            root_level = %base,
            "built header tree"
        );
        Ok(roots)
    }
}

/// Build the run of siblings at `base` starting from `start`.
///
/// Returns the nodes built at this level and the index of the first record left unconsumed,
/// which is either the end of the sequence or a heading shallower than `base`.
fn build_level(
    records: &[HeadingRecord],
    start: usize,
    base: HeadingLevel,
) -> Result<(Vec<HeaderNode>, usize), NavError> {
    let mut nodes: Vec<HeaderNode> = Vec::new();
    let mut cursor = start;

    while let Some(record) = records.get(cursor) {
        match record.level.cmp(&base) {
            Ordering::Equal => {
                trace!(index = cursor, id = %record.id, level = %base, "sibling");
                nodes.push(HeaderNode::from(record));
                cursor += 1;
            }
            Ordering::Greater => {
                let Some(current) = nodes.last_mut() else {
                    return Err(NavError::OrphanedHeading {
                        index: cursor,
                        level: record.level.rank(),
                    });
                };
                let (children, next) = build_level(records, cursor, record.level)?;
                // Separate deeper runs under one parent (h1, h3, h2) accumulate.
                current.children.extend(children);
                cursor = next;
            }
            Ordering::Less => break,
        }
    }

    Ok((nodes, cursor))
}

/// Build a header tree rooted at the first heading's level.
///
/// # Errors
///
/// Returns [`NavError::MalformedSequence`] if a heading shallower than the first heading
/// appears later in the sequence.
pub fn build_header_tree(records: &[HeadingRecord]) -> Result<Vec<HeaderNode>, NavError> {
    HeaderTreeBuilder::new().build(records)
}

#[must_use]
/// Pre-order walk of the tree, paired with each node's nesting depth (0 for roots).
pub fn flatten(nodes: &[HeaderNode]) -> Vec<(usize, &HeaderNode)> {
    fn walk<'a>(nodes: &'a [HeaderNode], depth: usize, out: &mut Vec<(usize, &'a HeaderNode)>) {
        for node in nodes {
            out.push((depth, node));
            walk(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(nodes, 0, &mut out);
    out
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
