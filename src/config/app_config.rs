//! Client configuration structures
//!
//! This module contains the configuration the account client is built from.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::{ClientError, ClientResult};

/// Public Hive API node used when no endpoint is supplied
pub const DEFAULT_ENDPOINT: &str = "https://api.hive.blog";

/// Base name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "HiveClient";

/// Prefix of the environment variables that override file settings
pub const ENV_PREFIX: &str = "HIVE_CLIENT";

/// Account client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// JSON-RPC endpoint URL
    #[validate(url)]
    pub endpoint: String,

    /// Request timeout in seconds, transport default when unset
    #[serde(default)]
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `endpoint` with every other setting defaulted
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Configuration built from the first of `endpoints`; later entries are
    /// ignored and an empty list yields the default endpoint.
    pub fn from_endpoints<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        endpoints
            .into_iter()
            .next()
            .map(Self::with_endpoint)
            .unwrap_or_default()
    }

    /// Load configuration from defaults, the optional `HiveClient` file and
    /// `HIVE_CLIENT__*` environment variables
    pub fn load() -> ClientResult<Self> {
        Self::load_from(CONFIG_FILE_NAME)
    }

    /// Same as [`ClientConfig::load`] with an explicit file base name
    pub fn load_from(file_name: &str) -> ClientResult<Self> {
        let config = config::Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: ClientConfig = config
            .try_deserialize()
            .map_err(|e| ClientError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()?;

        Ok(config)
    }

    /// Run derive-level and scheme validation
    pub fn validate_config(&self) -> ClientResult<()> {
        self.validate()?;
        crate::config::ConfigValidator::validate_config(self)
    }
}
