//! Account client - typed queries over the account methods of a Hive node
//!
//! Every query follows the same path: build the request, send it once, check
//! the envelope, decode the payload. The first error encountered is returned
//! to the caller unchanged.

use serde_json::Value;
use tracing::instrument;

use crate::{
    application::{decoder::ResponseDecoder, methods},
    config::ClientConfig,
    domain::{
        account::{AccountData, HistoryEntry},
        rpc::RpcRequest,
        transport::RpcTransport,
    },
    infrastructure::adapters::HttpTransport,
    shared::error::ClientResult,
};

/// Client for the account query methods
///
/// The endpoint is fixed at construction. The client holds no other state, so
/// one instance can serve any number of sequential or concurrent callers.
///
/// ```no_run
/// # async fn run() -> hive_accounts_rpc::ClientResult<()> {
/// let client = hive_accounts_rpc::AccountClient::new()?;
/// let accounts = client.get_accounts(&["jrswab"]).await?;
/// println!("{}", accounts[0].balance);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AccountClient<T: RpcTransport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl AccountClient<HttpTransport> {
    /// Client for the default public endpoint
    pub fn new() -> ClientResult<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Client for a specific node
    pub fn with_endpoint(endpoint: impl Into<String>) -> ClientResult<Self> {
        Self::from_config(ClientConfig::with_endpoint(endpoint))
    }

    /// Client for the first of `endpoints`; the rest are ignored
    pub fn from_endpoints<I, S>(endpoints: I) -> ClientResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(ClientConfig::from_endpoints(endpoints))
    }

    /// Client built from a validated configuration
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        config.validate_config()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: RpcTransport> AccountClient<T> {
    /// Client that sends through the given transport
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: RpcRequest) -> ClientResult<Value> {
        self.transport.send(&request).await?.into_result()
    }

    /// Number of accounts on the chain
    #[instrument(level = "debug", skip(self))]
    pub async fn get_account_count(&self) -> ClientResult<i64> {
        let result = self.call(methods::account_count()?).await?;
        ResponseDecoder::decode_integer(&result)
    }

    /// Average "forum" bandwidth of `account`.
    ///
    /// Public nodes no longer serve this method; expect a remote error for
    /// which [`ClientError::is_method_not_found`](crate::ClientError::is_method_not_found)
    /// holds.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_account_bandwidth(&self, account: &str) -> ClientResult<i64> {
        let result = self.call(methods::account_bandwidth(account)?).await?;
        ResponseDecoder::decode_integer(&result)
    }

    /// Up to `limit` history entries of `account`, counting back from `start`
    #[instrument(level = "debug", skip(self))]
    pub async fn get_account_history(
        &self,
        account: &str,
        start: i64,
        limit: u32,
    ) -> ClientResult<Vec<HistoryEntry>> {
        let result = self.call(methods::account_history(account, start, limit)?).await?;
        ResponseDecoder::decode_history(result)
    }

    /// Reputation score of `account`
    #[instrument(level = "debug", skip(self))]
    pub async fn get_account_reputation(&self, account: &str) -> ClientResult<i64> {
        let result = self.call(methods::account_reputation(account)?).await?;
        ResponseDecoder::decode_reputation(result)
    }

    /// Records for `names` in one round trip.
    ///
    /// At least one name is required; an empty slice fails before anything is
    /// sent. The records come back in the node's order and are not matched
    /// against the requested names.
    #[instrument(level = "debug", skip_all, fields(count = names.len()))]
    pub async fn get_accounts<S: AsRef<str>>(&self, names: &[S]) -> ClientResult<Vec<AccountData>> {
        let request = methods::accounts(names)?;
        let result = self.call(request).await?;
        ResponseDecoder::decode_accounts(result)
    }

    /// Record of a single account, `None` if the node knows no such account
    #[instrument(level = "debug", skip(self))]
    pub async fn get_account(&self, name: &str) -> ClientResult<Option<AccountData>> {
        let accounts = self.get_accounts(&[name]).await?;
        Ok(accounts.into_iter().next())
    }
}
