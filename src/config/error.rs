//! Configuration error types.

use thiserror::Error;

use crate::image::background::FilterError;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Collects every invalid field before failing.
#[derive(Debug, Default)]
pub(super) struct ConfigDiagnostics {
    errors: Vec<String>,
}

impl ConfigDiagnostics {
    pub(super) fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(format!("[{field}] {}", message.into()));
    }

    /// Convert to Result (returns Err if there are errors).
    pub(super) fn into_result(self) -> Result<(), ConfigError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self.errors.join("; ")))
        }
    }
}
