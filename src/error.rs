//! Error types for the ACL regex crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AclError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AclError {
    #[error("Invalid regular expression '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },
    #[error("Empty regular expression")]
    EmptyPattern,
    #[error("Regular expression larger than {limit} characters ({length})")]
    PatternTooLong { length: usize, limit: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("YAML parsing error: {0}")]
    YamlError(String),
    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for AclError {
    fn from(err: std::io::Error) -> Self {
        AclError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for AclError {
    fn from(err: serde_yaml::Error) -> Self {
        AclError::YamlError(err.to_string())
    }
}

impl From<serde_json::Error> for AclError {
    fn from(err: serde_json::Error) -> Self {
        AclError::JsonError(err.to_string())
    }
}
