//! Component configuration loaded from TOML.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields the stock behavior:
//!
//! ```toml
//! [browser]
//! title = "Reservations"
//! placeholder = "Search reservations..."
//! matcher = "substring"   # or "fuzzy"
//! item_name = "reservation"
//!
//! [nav]
//! match_mode = "prefix"   # or "segment"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::browser::QueryMatcher;
use crate::error::{Error, Result};
use crate::nav::MatchMode;

/// Top-level configuration for both components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record browser options.
    pub browser: BrowserConfig,
    /// Navigation sidebar options.
    pub nav: NavConfig,
}

/// Options for the record browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Title shown above the table.
    pub title: String,
    /// Prompt shown in the search field while it is empty.
    pub placeholder: String,
    /// Row shown when no record matches.
    pub empty_message: String,
    /// How the query is matched against search projections.
    pub matcher: QueryMatcher,
    /// Singular noun for the status line.
    pub item_name: String,
    /// Plural noun for the status line.
    pub item_name_plural: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            title: "Records".to_string(),
            placeholder: "Search...".to_string(),
            empty_message: "No data found.".to_string(),
            matcher: QueryMatcher::default(),
            item_name: "record".to_string(),
            item_name_plural: "records".to_string(),
        }
    }
}

/// Options for navigation resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Whether link prefixes must end on a path separator.
    pub match_mode: MatchMode,
}

impl Config {
    /// Parses a configuration document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config = toml::from_str(s)?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
