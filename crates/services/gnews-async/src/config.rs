use secrecy::{ExposeSecret, SecretString};

/// Default GNews API base URL
pub const GNEWS_DEFAULT_BASE: &str = "https://gnews.io/api/v4";
/// Query parameter carrying the API key
pub const QUERY_API_KEY: &str = "apikey";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "GNEWS_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "GNEWS_BASE_URL";

/// Configuration for the GNews client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GNewsConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

impl Default for GNewsConfig {
    fn default() -> Self {
        Self {
            api_base: GNEWS_DEFAULT_BASE.into(),
            api_key: None,
        }
    }
}

impl GNewsConfig {
    /// Creates a configuration with the default base URL and no API key
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from the process environment
    ///
    /// Reads:
    /// - `GNEWS_KEY` for the API key
    /// - `GNEWS_BASE_URL` for a custom API base URL (defaults to `https://gnews.io/api/v4`)
    ///
    /// Values are trimmed; empty values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = non_empty_env(ENV_API_KEY).map(SecretString::from);
        let api_base = non_empty_env(ENV_BASE_URL).unwrap_or_else(|| GNEWS_DEFAULT_BASE.into());
        Self { api_base, api_key }
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration trait for the GNews client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns the authentication query pair to append to every request
    ///
    /// # Errors
    ///
    /// Returns [`GNewsError::MissingCredential`](crate::GNewsError::MissingCredential)
    /// when no usable key is configured.
    fn auth_query(&self) -> Result<(&'static str, String), crate::error::GNewsError>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::GNewsError> {
        self.auth_query().map(|_| ())
    }
}

impl Config for GNewsConfig {
    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn auth_query(&self) -> Result<(&'static str, String), crate::error::GNewsError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => {
                Ok((QUERY_API_KEY, secret.expose_secret().trim().to_string()))
            }
            _ => Err(crate::error::GNewsError::MissingCredential),
        }
    }
}
