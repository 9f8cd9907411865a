//! Logging utilities module
//!
//! The client itself only emits `tracing` events; installing a subscriber is
//! left to the embedding application. This helper covers the common setup.

use crate::shared::error::{ClientError, ClientResult};

/// Logging utilities for the client
pub struct LoggingUtils;

impl LoggingUtils {
    /// Install a global fmt subscriber filtered at `level`.
    ///
    /// `RUST_LOG` takes precedence over `level` when it is set.
    pub fn initialize(level: &str) -> ClientResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ClientError::Config(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }
}
