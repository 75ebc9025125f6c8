//! pagenav: on-page navigation panels built from document heading trees.
//!
//! A document is queried for its headings, the flat heading sequence is nested into a header
//! tree, and the tree is rendered as an indented list of `#<id>` links.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod page_nav;
pub mod render;
pub mod tree;
pub mod ui;

pub use error::NavError;
pub use heading::{HeadingLevel, HeadingRecord, RawHeading};
pub use page_nav::PageNav;
pub use render::{LinkRenderer, NavEntry, NavRenderer};
pub use tree::{build_header_tree, flatten, HeaderNode, HeaderTreeBuilder};
