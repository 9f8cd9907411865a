//! Application layer - the account client and its request/response plumbing
//!
//! This module contains the method registry, the response decoder and the
//! client that ties them to a transport.

pub mod client;
pub mod decoder;
pub mod methods;

pub use client::AccountClient;
pub use decoder::ResponseDecoder;
pub use methods::AccountMethod;
