//! Filter configuration.
//!
//! A [`FilterConfig`] describes one filter invocation. It is plain data: the
//! caller supplies TOML text (or builds the struct directly), nothing is read
//! from disk or the environment.
//!
//! # Example
//!
//! ```toml
//! background = "#00ff00"   # Color to key out
//! threshold = 40           # 0..=442, distance below this is background
//! operation = "replace"    # "remove" | "replace" | "lighten"
//! replacement = "#ffffff"  # Only used by "replace"
//! ```

mod error;

pub use error::ConfigError;

use error::ConfigDiagnostics;
use image::{Rgb, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::image::background::{self, Operation, Threshold, parse_hex_color, to_hex_color};
use crate::{debug, log};

/// Operation selector as written in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Make background transparent.
    #[default]
    Remove,
    /// Replace background with `replacement`.
    Replace,
    /// Lighten background toward white.
    Lighten,
}

/// Settings for one background filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Background color to match, as hex.
    pub background: String,

    /// Matching sensitivity. Kept raw so validation can report it.
    pub threshold: i64,

    /// What to do with background pixels.
    pub operation: OperationKind,

    /// Replacement color for `operation = "replace"`, as hex.
    pub replacement: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            threshold: 10,
            operation: OperationKind::Remove,
            replacement: "#ffffff".to_string(),
        }
    }
}

impl FilterConfig {
    /// Build a config from already-typed values.
    pub fn new(background: Rgb<u8>, threshold: Threshold, operation: Operation) -> Self {
        let (operation, replacement) = match operation {
            Operation::Remove => (OperationKind::Remove, None),
            Operation::Replace(color) => (OperationKind::Replace, Some(color)),
            Operation::Lighten => (OperationKind::Lighten, None),
        };
        Self {
            background: to_hex_color(background),
            threshold: threshold.get().into(),
            operation,
            replacement: replacement
                .map(to_hex_color)
                .unwrap_or_else(|| Self::default().replacement),
        }
    }

    /// Parse and validate TOML text.
    ///
    /// Unknown fields are ignored with a warning.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            log!("warning"; "ignoring unknown config fields: {}", ignored.join(", "));
        }

        config.validate()?;
        debug!("config"; "loaded {:?}", config);
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::default();

        if parse_hex_color(&self.background).is_none() {
            diag.error(
                "background",
                format!("invalid hex color `{}`", self.background),
            );
        }
        if let Err(err) = Threshold::new(self.threshold) {
            diag.error("threshold", err.to_string());
        }
        if self.operation == OperationKind::Replace && parse_hex_color(&self.replacement).is_none()
        {
            diag.error(
                "replacement",
                format!("invalid hex color `{}`", self.replacement),
            );
        }

        diag.into_result()
    }

    pub fn background_color(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_hex_color(&self.background).ok_or_else(|| {
            ConfigError::Validation(format!("invalid background color `{}`", self.background))
        })
    }

    pub fn threshold(&self) -> Result<Threshold, ConfigError> {
        Ok(Threshold::new(self.threshold)?)
    }

    pub fn operation(&self) -> Result<Operation, ConfigError> {
        Ok(match self.operation {
            OperationKind::Remove => Operation::Remove,
            OperationKind::Lighten => Operation::Lighten,
            OperationKind::Replace => {
                let color = parse_hex_color(&self.replacement).ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "invalid replacement color `{}`",
                        self.replacement
                    ))
                })?;
                Operation::Replace(color)
            }
        })
    }

    /// Run the configured operation on a copy of `img`.
    pub fn apply(&self, img: &RgbaImage) -> Result<RgbaImage, ConfigError> {
        let color = self.background_color()?;
        let threshold = self.threshold()?;
        let operation = self.operation()?;
        Ok(background::apply(img, color, threshold, operation)?)
    }
}

// ============================================================================
// tests
// ============================================================================
