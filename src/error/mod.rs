// Error types for gemini-image-translate
// Author: kelexine (https://github.com/kelexine)

use serde::Serialize;
use thiserror::Error;

/// Every way a translation run can fail.
///
/// The `Display` text of each variant is exactly the message placed in the
/// `{"error": ...}` payload, so the CLI never formats errors itself.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("{0} environment variable not set.")]
    MissingApiKey(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image file not found: {0}")]
    ImageNotFound(String),

    #[error("No text found in response parts.")]
    NoTextInParts,

    #[error("Failed to extract translation from response. The response might be empty or in an unexpected format.")]
    UnexpectedResponse,

    #[error("An error occurred: {0}")]
    Transport(String),
}

/// Coarse classification of a [`TranslateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Input,
    ResponseShape,
    Transport,
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::MissingApiKey(_) | TranslateError::Config(_) => {
                ErrorKind::Configuration
            }
            TranslateError::ImageNotFound(_) => ErrorKind::Input,
            TranslateError::NoTextInParts | TranslateError::UnexpectedResponse => {
                ErrorKind::ResponseShape
            }
            TranslateError::Transport(_) => ErrorKind::Transport,
        }
    }
}

impl From<std::io::Error> for TranslateError {
    fn from(err: std::io::Error) -> Self {
        TranslateError::Transport(err.to_string())
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(err: serde_json::Error) -> Self {
        TranslateError::Transport(err.to_string())
    }
}

impl From<config::ConfigError> for TranslateError {
    fn from(err: config::ConfigError) -> Self {
        TranslateError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
