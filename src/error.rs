//! Error types for the translator client.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TranslateError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Argument mismatch: {message}")]
    ArgumentMismatch { message: String },

    #[error("TEXT_TOO_LARGE: {size} bytes exceeds the {limit} byte limit")]
    TextTooLarge { size: usize, limit: usize },

    #[error("Error from Apertium API (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("Error reading translation stream: {message}")]
    Stream { message: String },

    #[error("Malformed response: {message}")]
    Parse { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TranslateError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn argument_mismatch(msg: impl Into<String>) -> Self {
        Self::ArgumentMismatch {
            message: msg.into(),
        }
    }

    pub fn service(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status,
            body: body.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream {
            message: msg.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
