//! Error types for building and rendering tables.

use std::io;
use std::path::PathBuf;

use rollbook_render::RenderError;

/// Errors returned at the table's boundaries.
///
/// State transitions never fail; only construction and rendering do.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two column descriptors share an id.
    #[error("Duplicate column id '{0}'")]
    DuplicateColumn(String),

    /// A presenter failed to render its template.
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
}

/// Errors from loading a [`TableConfig`](crate::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid YAML for a table config.
    #[error("Invalid table config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
