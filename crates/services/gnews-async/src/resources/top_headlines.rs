use serde_json::Value;

use crate::{
    client::Client,
    config::Config,
    error::GNewsError,
    transport::Transport,
    types::{ArticlesEnvelope, HeadlinesRequest},
};

/// Endpoint path for trending headlines
pub const TOP_HEADLINES_ENDPOINT: &str = "top-headlines";

/// API resource for the `/top-headlines` endpoint
pub struct TopHeadlines<'c, C: Config, T: Transport> {
    client: &'c Client<C, T>,
}

impl<'c, C: Config, T: Transport> TopHeadlines<'c, C, T> {
    /// Creates a new `TopHeadlines` resource
    #[must_use]
    pub const fn new(client: &'c Client<C, T>) -> Self {
        Self { client }
    }

    /// Fetch headlines and return the upstream body untouched
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request fails, or the API returns an error.
    pub async fn create(&self, req: &HeadlinesRequest) -> Result<Value, GNewsError> {
        let params = req.to_query()?;
        self.client.get_json(TOP_HEADLINES_ENDPOINT, params).await
    }

    /// Fetch headlines and normalize the articles, including each article's language
    ///
    /// # Errors
    ///
    /// Same as [`TopHeadlines::create`].
    pub async fn articles(&self, req: &HeadlinesRequest) -> Result<ArticlesEnvelope, GNewsError> {
        let body = self.create(req).await?;
        Ok(ArticlesEnvelope::from_upstream(&body, true))
    }
}

// Add accessor to client
impl<C: Config, T: Transport> crate::Client<C, T> {
    /// Returns the Top Headlines API resource
    #[must_use]
    pub const fn top_headlines(&self) -> TopHeadlines<'_, C, T> {
        TopHeadlines::new(self)
    }
}
