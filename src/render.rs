//! Rendering a header tree into the "On This Page" panel.
//!
//! The tree is walked parent-first into a list of [`NavEntry`]s, each one indent tier deeper
//! than its parent. Every output format is produced from that list. Anchor markup is left to
//! a [`LinkRenderer`] so the panel can be embedded in whatever page links look like there.

use crate::config::Config;
use crate::tree::HeaderNode;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use serde_json::json;

/// Produces the markup for one in-page link.
pub trait LinkRenderer {
    /// Link to `href` labelled with `text`.
    fn link(&self, href: &str, text: &str) -> String;
}

/// HTML anchors carrying a CSS class.
pub struct HtmlLink {
    /// Class attribute put on every anchor.
    pub class: String,
}

impl LinkRenderer for HtmlLink {
    fn link(&self, href: &str, text: &str) -> String {
        format!(
            "<a class=\"{}\" href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&self.class),
            encode_double_quoted_attribute(href),
            encode_text(text)
        )
    }
}

/// Markdown inline links.
pub struct MarkdownLink;

impl LinkRenderer for MarkdownLink {
    fn link(&self, href: &str, text: &str) -> String {
        format!("[{}]({})", escape_markdown(text), link_destination(href))
    }
}

/// Backslash-escape the characters markdown would read as inline markup.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '[' | ']' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Link destination, in angle brackets when it holds spaces or parentheses.
fn link_destination(href: &str) -> String {
    if href.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>')) {
        format!("<{}>", href.replace('<', "\\<").replace('>', "\\>"))
    } else {
        href.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One line of the navigation panel.
pub struct NavEntry {
    /// Indent tier, 0 for root headings.
    pub tier: u8,
    /// Link target, `#<id>`.
    pub href: String,
    /// Link text.
    pub title: String,
    /// Source line of the heading (0-indexed), if known.
    pub line: Option<usize>,
}

/// Lays out a header tree as an indented list of anchor entries.
pub struct NavRenderer {
    panel_title: String,
    indent_unit: f32,
}

impl Default for NavRenderer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl NavRenderer {
    #[must_use]
    /// Renderer with a panel heading and an indent step (rem per tier).
    pub fn new(panel_title: impl Into<String>, indent_unit: f32) -> Self {
        Self {
            panel_title: panel_title.into(),
            indent_unit,
        }
    }

    #[must_use]
    /// Renderer configured from user preferences.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.panel_title.clone(), config.indent_unit)
    }

    #[must_use]
    /// Heading shown above the list.
    pub fn panel_title(&self) -> &str {
        &self.panel_title
    }

    #[must_use]
    /// Indent for a tier, in rem.
    pub fn indent(&self, tier: u8) -> f32 {
        self.indent_unit * f32::from(tier)
    }

    #[must_use]
    /// HTML panel, or `None` when there are no headers and the panel should not be shown.
    pub fn render_html(&self, headers: &[HeaderNode], links: &dyn LinkRenderer) -> Option<String> {
        if headers.is_empty() {
            return None;
        }

        let items: String = entries(headers, 0)
            .iter()
            .map(|entry| {
                format!(
                    "    <li style=\"margin-left: {}rem\">{}</li>\n",
                    self.indent(entry.tier),
                    links.link(&entry.href, &entry.title)
                )
            })
            .collect();
        Some(format!(
            "<aside class=\"page-nav\">\n  <h5>{}</h5>\n  <ul>\n{items}  </ul>\n</aside>\n",
            encode_text(&self.panel_title)
        ))
    }

    #[must_use]
    /// Nested markdown list of links, or `None` when there are no headers.
    pub fn render_markdown(&self, headers: &[HeaderNode]) -> Option<String> {
        if headers.is_empty() {
            return None;
        }

        let links = MarkdownLink;
        let items: String = entries(headers, 0)
            .iter()
            .map(|entry| {
                format!(
                    "{}- {}\n",
                    "  ".repeat(usize::from(entry.tier)),
                    links.link(&entry.href, &entry.title)
                )
            })
            .collect();
        Some(format!("**{}**\n\n{items}", escape_markdown(&self.panel_title)))
    }

    #[must_use]
    /// Indented plain-text outline, or `None` when there are no headers.
    pub fn render_text(&self, headers: &[HeaderNode]) -> Option<String> {
        if headers.is_empty() {
            return None;
        }

        let items: String = entries(headers, 0)
            .iter()
            .map(|entry| format!("{}{}\n", "  ".repeat(usize::from(entry.tier) + 1), entry.title))
            .collect();
        Some(format!("{}\n{items}", self.panel_title))
    }

    /// Panel heading and header tree as pretty-printed JSON, or `None` when there are no
    /// headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be serialised.
    pub fn render_json(&self, headers: &[HeaderNode]) -> Result<Option<String>, serde_json::Error> {
        if headers.is_empty() {
            return Ok(None);
        }
        let panel = json!({ "title": self.panel_title, "headers": headers });
        serde_json::to_string_pretty(&panel).map(Some)
    }
}

#[must_use]
/// Entries for `headers` starting at tier `nesting`, each parent directly followed by its
/// children one tier deeper.
pub fn entries(headers: &[HeaderNode], nesting: u8) -> Vec<NavEntry> {
    let mut out = Vec::new();
    push_entries(headers, nesting, &mut out);
    out
}

fn push_entries(headers: &[HeaderNode], nesting: u8, entries: &mut Vec<NavEntry>) {
    for header in headers {
        entries.push(NavEntry {
            tier: nesting,
            href: format!("#{}", header.id),
            title: header.title.clone(),
            line: header.line,
        });
        if !header.children.is_empty() {
            push_entries(&header.children, nesting.saturating_add(1), entries);
        }
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
