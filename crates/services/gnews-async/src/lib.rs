#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async GNews API client with validated requests, pluggable transport, and wiremock tests.

/// HTTP client implementation (the request gateway)
pub mod client;
/// Configuration types for the client
pub mod config;
/// `YYYY-MM-DD` to API timestamp conversion
pub mod dates;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Transport abstraction over the HTTP GET
pub mod transport;
/// Request and response types
pub mod types;
/// Reusable parameter predicates
pub mod validation;

pub use crate::client::Client;
pub use crate::config::GNewsConfig;
pub use crate::error::GNewsError;
pub use crate::transport::{RawResponse, ReqwestTransport, Transport};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, GNewsConfig, GNewsError};
}
