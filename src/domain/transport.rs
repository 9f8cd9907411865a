//! Transport port: the only seam between the client and the network

use async_trait::async_trait;

use crate::domain::rpc::{RpcRequest, RpcResponse};
use crate::shared::error::ClientResult;

/// Delivers one request and hands back the node's envelope untouched.
///
/// Implementations return `Err` only for transport failures; an envelope that
/// carries an error object is still `Ok`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, request: &RpcRequest) -> ClientResult<RpcResponse>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    async fn send(&self, request: &RpcRequest) -> ClientResult<RpcResponse> {
        (**self).send(request).await
    }
}
