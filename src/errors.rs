//! Error types for curlpy

use thiserror::Error;

/// Fatal conversion errors. Anything else in a command degrades to a
/// [`FieldWarning`] and the conversion still produces code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Not a valid curl command: input must start with 'curl'")]
    InvalidCommand,

    #[error("Unable to find a URL in the curl command")]
    UrlNotFound,
}

/// A sub-field of the command that could not be used and was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldWarning {
    #[error("Ignoring credential without ':' separator")]
    MalformedCredential,

    #[error("Ignoring malformed header '{0}'")]
    MalformedHeader(String),

    #[error("Ignoring unsupported HTTP method '{0}'")]
    UnsupportedMethod(String),

    #[error("Option {0} is missing its value")]
    MissingValue(String),
}

/// Main error type for curlpy
#[derive(Error, Debug)]
pub enum CurlpyError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("History error: {0}")]
    History(String),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, CurlpyError>;
