//! Registry of the remote account methods and their request shapes

use crate::domain::rpc::{RpcParam, RpcRequest};
use crate::shared::error::{ClientError, ClientResult};

/// Bandwidth class queried by `get_account_bandwidth`
pub const FORUM_BANDWIDTH: &str = "forum";

/// Account query methods of the condenser API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMethod {
    AccountCount,
    AccountBandwidth,
    AccountHistory,
    AccountReputations,
    Accounts,
}

impl AccountMethod {
    pub fn name(&self) -> &'static str {
        match self {
            AccountMethod::AccountCount => "get_account_count",
            AccountMethod::AccountBandwidth => "get_account_bandwidth",
            AccountMethod::AccountHistory => "get_account_history",
            AccountMethod::AccountReputations => "get_account_reputations",
            AccountMethod::Accounts => "get_accounts",
        }
    }

    fn request(&self, params: Vec<RpcParam>) -> ClientResult<RpcRequest> {
        RpcRequest::new(self.name(), params)
    }
}

pub fn account_count() -> ClientResult<RpcRequest> {
    AccountMethod::AccountCount.request(Vec::new())
}

pub fn account_bandwidth(account: &str) -> ClientResult<RpcRequest> {
    AccountMethod::AccountBandwidth.request(vec![account.into(), FORUM_BANDWIDTH.into()])
}

pub fn account_history(account: &str, start: i64, limit: u32) -> ClientResult<RpcRequest> {
    AccountMethod::AccountHistory.request(vec![account.into(), start.into(), limit.into()])
}

/// Reputations are listed from `account` onward; a limit of one selects it
pub fn account_reputation(account: &str) -> ClientResult<RpcRequest> {
    AccountMethod::AccountReputations.request(vec![account.into(), RpcParam::Int(1)])
}

/// Names travel as one array argument: `[["alice", "bob"]]`
pub fn accounts<S: AsRef<str>>(names: &[S]) -> ClientResult<RpcRequest> {
    if names.is_empty() {
        return Err(ClientError::Validation(format!(
            "{} needs at least one account name",
            AccountMethod::Accounts.name()
        )));
    }

    let names = names
        .iter()
        .map(|name| RpcParam::from(name.as_ref()))
        .collect();
    AccountMethod::Accounts.request(vec![RpcParam::List(names)])
}
