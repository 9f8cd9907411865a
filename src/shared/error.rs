//! Error handling module
//!
//! This module provides centralized error handling for the client.

use thiserror::Error;

/// JSON-RPC code a node answers with when it does not know the method
pub const METHOD_NOT_FOUND_CODE: i64 = -32601;

/// Value integer-returning queries report in place of a result on failure
pub const ERROR_SENTINEL: i64 = -1;

/// Client error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`ClientError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Remote,
    Decode,
    Validation,
    Config,
}

impl ClientError {
    /// Create a remote error from the code and message of an error object
    pub fn remote(code: i64, message: impl Into<String>) -> Self {
        ClientError::Remote {
            code,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::Remote { .. } => ErrorKind::Remote,
            ClientError::Decode(_) => ErrorKind::Decode,
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Config(_) => ErrorKind::Config,
        }
    }

    /// Code of the remote error object, if this is a remote error
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            ClientError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the node rejected the call because it does not serve the method
    pub fn is_method_not_found(&self) -> bool {
        self.remote_code() == Some(METHOD_NOT_FOUND_CODE)
    }
}

/// Client result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Collapses an integer query result into the `-1` sentinel convention.
pub trait SentinelExt {
    fn or_sentinel(self) -> i64;
}

impl SentinelExt for ClientResult<i64> {
    fn or_sentinel(self) -> i64 {
        self.unwrap_or(ERROR_SENTINEL)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Config(err.to_string())
    }
}
