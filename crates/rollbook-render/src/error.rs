//! Error types for rendering.

use std::fmt;

/// Error type for rendering operations.
///
/// Wraps template engine failures without exposing the engine's own types.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    TemplateError(String),

    /// Template not found in the environment.
    TemplateNotFound(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            _ => RenderError::TemplateError(err.to_string()),
        }
    }
}
