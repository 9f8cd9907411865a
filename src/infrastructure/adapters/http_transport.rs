//! HTTP transport adapter for communicating with a Hive node
//!
//! Posts each JSON-RPC request once and returns the decoded envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    domain::{
        rpc::{RpcRequest, RpcResponse},
        transport::RpcTransport,
    },
    shared::error::{ClientError, ClientResult},
};

/// reqwest-backed [`RpcTransport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for the configured endpoint
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, request: &RpcRequest) -> ClientResult<RpcResponse> {
        debug!(
            method = %request.method,
            endpoint = %self.endpoint,
            params = request.params.len(),
            "Sending JSON-RPC request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(method = %request.method, endpoint = %self.endpoint, error = %e, "Request failed");
                ClientError::Transport(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                warn!(method = %request.method, error = %e, "Failed to read response body");
                ClientError::Transport(format!("Failed to read response body: {}", e))
            })?;

        debug!(
            method = %request.method,
            status = %status,
            bytes = body.len(),
            "Received JSON-RPC response"
        );

        // Some nodes answer errors with a non-2xx status and a regular
        // envelope; the envelope wins whenever it parses.
        match serde_json::from_slice::<RpcResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => {
                warn!(method = %request.method, error = %e, "Unparseable JSON-RPC response");
                Err(ClientError::Transport(format!("Failed to parse response: {}", e)))
            }
            Err(_) => {
                warn!(method = %request.method, status = %status, "HTTP error without envelope");
                Err(ClientError::Transport(format!("HTTP error: {}", status)))
            }
        }
    }
}
