use serde_json::Value;

use crate::{
    client::Client,
    config::Config,
    error::GNewsError,
    transport::Transport,
    types::{ArticlesEnvelope, SearchRequest},
};

/// Endpoint path for keyword search
pub const SEARCH_ENDPOINT: &str = "search";

/// API resource for the `/search` endpoint
pub struct Search<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> Search<'c, C, T> {
    /// Creates a new Search resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Execute a search and return the upstream body untouched
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request fails, or the API returns an error.
    pub async fn create(&self, req: &SearchRequest) -> Result<Value, GNewsError> {
        let params = req.to_query()?;
        self.client.get_json(SEARCH_ENDPOINT, params).await
    }

    /// Execute a search and normalize the articles
    ///
    /// # Errors
    ///
    /// Same as [`Search::create`].
    pub async fn articles(&self, req: &SearchRequest) -> Result<ArticlesEnvelope, GNewsError> {
        let body = self.create(req).await?;
        Ok(ArticlesEnvelope::from_upstream(&body, false))
    }
}

// Add accessor to client
impl<C: Config, T: Transport> crate::Client<C, T> {
    /// Returns the Search API resource
    #[must_use]
    pub const fn search(&self) -> Search<'_, C, T> {
        Search::new(self)
    }
}
