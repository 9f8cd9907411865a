//! Configuration management module
//!
//! This module handles loading and validating the client settings.

pub mod app_config;
pub mod validation;

pub use app_config::{ClientConfig, DEFAULT_ENDPOINT};
pub use validation::ConfigValidator;
