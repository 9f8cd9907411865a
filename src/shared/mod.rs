//! Shared utilities and common functionality
//!
//! This module contains error handling and logging helpers that are used
//! across the client.

pub mod error;
pub mod logging;

pub use error::{ClientError, ClientResult, ErrorKind, SentinelExt, ERROR_SENTINEL};
pub use logging::LoggingUtils;
