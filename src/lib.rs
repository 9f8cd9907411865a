//! hive-accounts-rpc - A client for the account queries of a Hive node
//!
//! This library builds JSON-RPC 2.0 requests for the condenser account
//! methods, sends them over HTTP and maps the loosely typed results onto a
//! fixed account model.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;


pub use application::AccountClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use domain::{AccountData, AccountReputation, Asset, HistoryEntry, RpcTransport};
pub use infrastructure::HttpTransport;
pub use shared::error::{ClientError, ClientResult, ErrorKind, SentinelExt, ERROR_SENTINEL};
