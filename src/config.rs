//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a pagenav.toml, and if present we load settings from there.
//! This provides the panel heading, indent step, link styling and file extension preferences.

use crate::heading::HeadingLevel;
use facet::Facet;
use std::fs;
use tracing::warn;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "pagenav.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from pagenav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "On This Page".to_string())]
    /// Heading shown above the navigation list.
    pub panel_title: String,
    #[facet(default = 1.5)]
    /// Indent added per nesting tier, in rem.
    pub indent_unit: f32,
    #[facet(default = "page-nav-link".to_string())]
    /// CSS class put on every rendered anchor.
    pub link_class: String,
    #[facet(default = 0)]
    /// Rank the tree is rooted at; 0 roots it at the first heading found.
    pub root_level: u8,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_title: "On This Page".to_string(),
            indent_unit: 1.5,
            link_class: "page-nav-link".to_string(),
            root_level: 0,
            file_extensions: vec!["md".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from pagenav.toml if present.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::from_toml(&contents),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parse configuration text, keeping defaults for anything missing or invalid.
    pub fn from_toml(contents: &str) -> Self {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring invalid {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Pinned root level, or `None` to root at the first heading.
    pub fn root_level(&self) -> Option<HeadingLevel> {
        HeadingLevel::from_rank(self.root_level)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
