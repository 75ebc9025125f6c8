//! Heading dumps taken from an already rendered page.
//!
//! A browser or static-site build can export the heading elements of its content region as a
//! JSON array of `{"tag": "h2", "id": "setup", "text": "Setup"}` objects. Tags are kept as
//! found, so headings outside the recognized ranks are reported when the dump is classified.

use crate::error::NavError;
use crate::formats::HeadingSource;
use crate::heading::RawHeading;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Headings deserialised from a JSON dump.
pub struct JsonHeadings {
    name: String,
    headings: Vec<RawHeading>,
}

impl JsonHeadings {
    /// Parse a JSON array of heading objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of headings.
    pub fn from_str(name: impl Into<String>, json: &str) -> Result<Self, NavError> {
        let headings: Vec<RawHeading> = serde_json::from_str(json)?;
        Ok(Self {
            name: name.into(),
            headings,
        })
    }

    /// Read a heading dump from disk, naming it after its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a heading array.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let json = fs::read_to_string(path)?;
        Self::from_str(path.display().to_string(), &json)
    }
}

impl HeadingSource for JsonHeadings {
    fn name(&self) -> &str {
        &self.name
    }

    fn query_headings(&self) -> Result<Vec<RawHeading>, NavError> {
        debug!(document = %self.name, headings = self.headings.len(), "read heading dump");
        Ok(self.headings.clone())
    }
}

#[cfg(test)]
#[path = "../tests/json.rs"]
mod tests;
