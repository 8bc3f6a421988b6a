//! Table configuration.
//!
//! All fields have defaults, so a config file only lists what it changes:
//!
//! ```yaml
//! enable_row_selection: true
//! mobile_breakpoint: 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::{LayoutSelector, DEFAULT_BREAKPOINT};

/// Presentation and behavior options for a [`DataTable`](crate::DataTable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Shown in the search line while no global filter is set.
    pub search_placeholder: String,
    /// Shown in place of rows when nothing passes the filters.
    pub empty_message: String,
    /// Adds checkboxes, the selection counter and the selection bar.
    pub enable_row_selection: bool,
    /// Viewports narrower than this many columns use the card layout.
    pub mobile_breakpoint: usize,
    /// Emits ANSI emphasis for titles, headers and markers.
    pub styled: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            search_placeholder: "Search all columns...".to_string(),
            empty_message: "No results.".to_string(),
            enable_row_selection: false,
            mobile_breakpoint: DEFAULT_BREAKPOINT,
            styled: false,
        }
    }
}

impl TableConfig {
    /// Parses a config from YAML. Missing fields take their defaults; an
    /// empty document yields the default config.
    ///
    /// ```rust
    /// use rollbook::TableConfig;
    ///
    /// let config = TableConfig::from_yaml_str("enable_row_selection: true").unwrap();
    /// assert!(config.enable_row_selection);
    /// assert_eq!(config.empty_message, "No results.");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(TableConfig::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded table config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// The layout selector for this config's breakpoint.
    pub fn layout_selector(&self) -> LayoutSelector {
        LayoutSelector::new(self.mobile_breakpoint)
    }
}
