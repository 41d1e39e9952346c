#![deny(warnings)]
#![deny(clippy::all)]

//! GNews search and top-headlines tools.

pub mod error;
pub mod fmt;
pub mod headlines;
pub mod registry;
pub mod search;
pub mod tool;
pub mod tools;
pub mod types;

use gnews_async::types::ResponseMode;
use gnews_async::{Client, GNewsConfig};

/// Shared state container for the news tools.
///
/// Holds one GNews client and the response mode applied to every operation.
pub struct NewsTools {
    /// GNews API client
    pub(crate) client: Client<GNewsConfig>,
    /// Normalized envelope or upstream pass-through
    pub(crate) mode: ResponseMode,
}

impl NewsTools {
    /// Create a `NewsTools` instance from an explicit configuration.
    #[must_use]
    pub fn new(config: GNewsConfig) -> Self {
        Self::with_client(Client::with_config(config))
    }

    /// Create a `NewsTools` instance configured from `GNEWS_KEY` / `GNEWS_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GNewsConfig::from_env())
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: Client<GNewsConfig>) -> Self {
        Self {
            client,
            mode: ResponseMode::default(),
        }
    }

    /// Select how results are shaped.
    #[must_use]
    pub const fn with_mode(mut self, mode: ResponseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current response mode
    #[must_use]
    pub const fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Underlying GNews client
    #[must_use]
    pub const fn client(&self) -> &Client<GNewsConfig> {
        &self.client
    }
}

impl Default for NewsTools {
    fn default() -> Self {
        Self::from_env()
    }
}

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tools::build_registry;
