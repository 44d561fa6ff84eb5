//! Report settings.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! settings file, then `DNDVAULT_*` environment variables.

use crate::errors::{ExError, ExErrorKind, VaultError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SECTION_CHAR_LIMIT: usize = 1024;
pub const DEFAULT_TRUNCATION_MARKER: &str = "...";
pub const DEFAULT_LABEL_WIDTH: usize = 16;
pub const DEFAULT_OLD_VALUE_WIDTH: usize = 14;

/// Prefix for environment overrides, e.g. `DNDVAULT_SECTION_CHAR_LIMIT`
pub const ENV_PREFIX: &str = "DNDVAULT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Hard cap on each section's rendered text, in characters
    pub section_char_limit: usize,
    /// Line appended in place of rows that did not fit
    pub truncation_marker: String,
    /// Padding of the label column
    pub label_width: usize,
    /// Padding of the old-value column
    pub old_value_width: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            section_char_limit: DEFAULT_SECTION_CHAR_LIMIT,
            truncation_marker: DEFAULT_TRUNCATION_MARKER.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
            old_value_width: DEFAULT_OLD_VALUE_WIDTH,
        }
    }
}

impl ReportSettings {
    /// Load settings from defaults, an optional file and the environment.
    ///
    /// A `path` that does not exist is skipped.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` - the file cannot be parsed, a value has the wrong
    ///   type, or the result fails [`ReportSettings::validate`]
    pub fn load(path: Option<&Path>) -> Result<Self, ExError> {
        let defaults = ReportSettings::default();
        let mut builder = Config::builder()
            .set_default("section_char_limit", defaults.section_char_limit as i64)
            .and_then(|b| b.set_default("truncation_marker", defaults.truncation_marker))
            .and_then(|b| b.set_default("label_width", defaults.label_width as i64))
            .and_then(|b| b.set_default("old_value_width", defaults.old_value_width as i64))
            .map_err(|e| ExError::from(VaultError::from(e)).with_op("load_settings"))?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: ReportSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ExError::from(VaultError::from(e)).with_op("load_settings"))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the budget can hold the truncation marker and stays within
    /// the 1024-character section cap.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` - the limit is zero, shorter than the marker, or
    ///   above [`DEFAULT_SECTION_CHAR_LIMIT`]
    pub fn validate(&self) -> Result<(), ExError> {
        if self.section_char_limit > DEFAULT_SECTION_CHAR_LIMIT {
            return Err(ExError::new(ExErrorKind::InvalidConfig)
                .with_op("validate_settings")
                .with_message(format!(
                    "section_char_limit {} exceeds the maximum of {}",
                    self.section_char_limit, DEFAULT_SECTION_CHAR_LIMIT
                )));
        }
        let marker_len = self.truncation_marker.chars().count();
        if self.section_char_limit == 0 || self.section_char_limit < marker_len {
            return Err(ExError::new(ExErrorKind::InvalidConfig)
                .with_op("validate_settings")
                .with_message(format!(
                    "section_char_limit {} cannot hold truncation marker of {} characters",
                    self.section_char_limit, marker_len
                )));
        }
        Ok(())
    }
}
