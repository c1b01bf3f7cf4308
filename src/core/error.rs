use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Can't resolve absolute path for '{0}'")]
    PathResolution(String),

    #[error("File already exists at '{0}'")]
    AlreadyExists(PathBuf),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<quick_xml::Error> for TextIoError {
    fn from(err: quick_xml::Error) -> Self {
        TextIoError::Xml(err.to_string())
    }
}

impl From<toml::de::Error> for TextIoError {
    fn from(err: toml::de::Error) -> Self {
        TextIoError::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for TextIoError {
    fn from(err: toml::ser::Error) -> Self {
        TextIoError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TextIoError>;
