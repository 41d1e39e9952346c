use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{Config, GNewsConfig},
    error::{GNewsError, upstream_error},
    transport::{ReqwestTransport, Transport},
    types::QueryParams,
};

/// GNews API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration, and over the [`Transport`] that performs the HTTP GET.
#[derive(Debug, Clone)]
pub struct Client<C: Config, T: Transport = ReqwestTransport> {
    transport: T,
    config: C,
}

impl Client<GNewsConfig> {
    /// Creates a new client configured from the environment
    ///
    /// Uses environment variables for authentication:
    /// - `GNEWS_KEY` for API key authentication
    /// - `GNEWS_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GNewsConfig::from_env())
    }
}

impl Default for Client<GNewsConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration and a default reqwest transport.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            transport: ReqwestTransport::new(),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.transport = ReqwestTransport::with_http_client(http);
        self
    }
}

impl<C: Config, T: Transport> Client<C, T> {
    /// Replaces the transport, e.g. with an in-memory double
    #[must_use]
    pub fn with_transport<U: Transport>(self, transport: U) -> Client<C, U> {
        Client {
            transport,
            config: self.config,
        }
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns a reference to the client's transport
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs one authenticated GET against `endpoint` and returns the JSON body.
    ///
    /// # Errors
    ///
    /// - [`GNewsError::MissingCredential`] before any request when no key is configured
    /// - [`GNewsError::Transport`] on network failure
    /// - [`GNewsError::Upstream`] on a non-200 status, or a 200 whose body is not JSON
    #[tracing::instrument(level = "debug", skip_all, fields(endpoint = %endpoint))]
    pub async fn get_json(&self, endpoint: &str, params: QueryParams) -> Result<Value, GNewsError> {
        let (key_name, key) = self.config.auth_query()?;
        let url = self.config.url(endpoint);
        debug!(%url, params = ?params, "sending GNews request");

        let mut query = params.into_pairs();
        query.push((key_name.to_string(), key));

        let response = self.transport.get(&url, &query).await?;
        let parsed = serde_json::from_slice::<Value>(&response.body);

        if response.status != StatusCode::OK {
            let text = String::from_utf8_lossy(&response.body);
            let err = upstream_error(response.status, parsed.as_ref().ok(), &text);
            warn!(status = response.status.as_u16(), error = %err, "GNews request failed");
            return Err(err);
        }

        parsed.map_err(|e| GNewsError::Upstream {
            status: response.status.as_u16(),
            message: format!("response body is not valid JSON: {e}"),
        })
    }
}
