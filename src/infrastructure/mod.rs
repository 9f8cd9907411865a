//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the concrete transport the client uses by default.

pub mod adapters;

pub use adapters::HttpTransport;
