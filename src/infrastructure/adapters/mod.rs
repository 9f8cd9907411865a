//! Infrastructure adapters module
//!
//! This module contains adapters for external services.

pub mod http_transport;

pub use http_transport::HttpTransport;
