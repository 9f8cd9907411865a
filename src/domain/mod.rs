//! Domain layer - wire model, account schema and transport port
//!
//! This module contains the account record and its coercion rules, the
//! JSON-RPC envelope types, and the trait every transport implements.

pub mod account;
pub mod asset;
pub mod coerce;
pub mod rpc;
pub mod transport;

pub use account::{AccountData, AccountReputation, Authority, HistoryEntry, Manabar};
pub use asset::Asset;
pub use rpc::{RpcError, RpcParam, RpcRequest, RpcResponse};
pub use transport::RpcTransport;
