//! Configuration for pattern-list compilation.
//!
//! The defaults reproduce the classic behavior: patterns are merged into
//! alternation groups until the working buffer would reach 8192 bytes, and an
//! advisory is logged once more than 100 patterns share one rule.

use crate::error::{AclError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default merge buffer threshold in bytes.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 8192;

/// Default number of merged patterns above which a performance warning is logged.
pub const DEFAULT_MERGE_WARNING_THRESHOLD: usize = 100;

/// Smallest chunk threshold that can hold one wrapped single-character pattern.
const MIN_CHUNK_THRESHOLD: usize = 8;

/// Largest accepted chunk threshold (1 MiB).
pub const MAX_CHUNK_THRESHOLD: usize = 1 << 20;

/// Compilation settings for a pattern list.
///
/// # Examples
///
/// ```rust
/// use acl_regex::AclConfig;
///
/// let config = AclConfig::default()
///     .with_chunk_threshold(1024)
///     .with_parse_only(true);
/// assert_eq!(config.max_pattern_len(), 1023);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclConfig {
    /// Size at which the merge buffer is flushed into its own compiled expression.
    ///
    /// A single normalized pattern longer than `chunk_threshold - 1` is rejected.
    pub chunk_threshold: usize,

    /// Merged pattern count above which a performance warning is emitted.
    pub merge_warning_threshold: usize,

    /// Syntax-check mode: advisories are raised to warning severity.
    pub parse_only: bool,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
            merge_warning_threshold: DEFAULT_MERGE_WARNING_THRESHOLD,
            parse_only: false,
        }
    }
}

impl AclConfig {
    /// Set the merge buffer threshold.
    pub fn with_chunk_threshold(mut self, chunk_threshold: usize) -> Self {
        self.chunk_threshold = chunk_threshold;
        self
    }

    /// Set the merged pattern count that triggers the performance warning.
    pub fn with_merge_warning_threshold(mut self, threshold: usize) -> Self {
        self.merge_warning_threshold = threshold;
        self
    }

    /// Enable or disable syntax-check mode.
    pub fn with_parse_only(mut self, parse_only: bool) -> Self {
        self.parse_only = parse_only;
        self
    }

    /// Longest normalized pattern accepted for compilation.
    pub fn max_pattern_len(&self) -> usize {
        self.chunk_threshold.saturating_sub(1)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CHUNK_THRESHOLD..=MAX_CHUNK_THRESHOLD).contains(&self.chunk_threshold) {
            return Err(AclError::InvalidConfig(format!(
                "chunk_threshold must be between {MIN_CHUNK_THRESHOLD} and {MAX_CHUNK_THRESHOLD}, got {}",
                self.chunk_threshold
            )));
        }
        Ok(())
    }

    /// Parse and validate a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, picking the format from its extension.
    ///
    /// Files ending in `.json` are read as JSON; everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_yaml_str(&contents),
        }
    }
}
