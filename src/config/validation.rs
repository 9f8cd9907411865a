//! Configuration validation module
//!
//! Checks that go beyond what the validator derive expresses.

use crate::config::ClientConfig;
use crate::shared::error::{ClientError, ClientResult};

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &ClientConfig) -> ClientResult<()> {
        Self::validate_endpoint(&config.endpoint)?;

        Ok(())
    }

    /// The node is reached over plain HTTP(S) only
    fn validate_endpoint(url: &str) -> ClientResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::Config(
                "Endpoint URL must start with http:// or https://".to_string(),
            ));
        }

        if url.starts_with("http://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
            tracing::warn!(endpoint = %url, "Endpoint is not using HTTPS");
        }

        Ok(())
    }
}
