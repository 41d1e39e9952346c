//! Tool trait implementations and registry builder.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::NewsTools;
use crate::error::ToolError;
use crate::registry::ToolRegistry;
use crate::tool::Tool;
use crate::types::{GetTopHeadlinesInput, NewsOutput, SearchNewsInput};

// ============================================================================
// SearchNewsTool
// ============================================================================

/// Tool for keyword search over GNews.
#[derive(Clone)]
pub struct SearchNewsTool {
    tools: Arc<NewsTools>,
}

impl SearchNewsTool {
    /// Create a new `SearchNewsTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<NewsTools>) -> Self {
        Self { tools }
    }
}

impl Tool for SearchNewsTool {
    type Input = SearchNewsInput;
    type Output = NewsOutput;

    const NAME: &'static str = "search_news";
    const DESCRIPTION: &'static str = "Search news articles by keywords via GNews. Supports language/country filters, a date range (YYYY-MM-DD) and sorting by publishedAt or relevance. Returns up to 10 articles.";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move { crate::search::search_news(&tools, input).await })
    }
}

// ============================================================================
// GetTopHeadlinesTool
// ============================================================================

/// Tool for current top headlines by category.
#[derive(Clone)]
pub struct GetTopHeadlinesTool {
    tools: Arc<NewsTools>,
}

impl GetTopHeadlinesTool {
    /// Create a new `GetTopHeadlinesTool` with shared state.
    #[must_use]
    pub const fn new(tools: Arc<NewsTools>) -> Self {
        Self { tools }
    }
}

impl Tool for GetTopHeadlinesTool {
    type Input = GetTopHeadlinesInput;
    type Output = NewsOutput;

    const NAME: &'static str = "get_top_headlines";
    const DESCRIPTION: &'static str = "Get current top headlines from GNews, optionally filtered by category (general, world, nation, business, technology, entertainment, sports, science, health), language, country, date range and keywords. Returns up to 10 articles.";

    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
        let tools = Arc::clone(&self.tools);
        Box::pin(async move { crate::headlines::get_top_headlines(&tools, input).await })
    }
}

// ============================================================================
// Registry Builder
// ============================================================================

/// Build a `ToolRegistry` containing both news tools.
pub fn build_registry(tools: Arc<NewsTools>) -> ToolRegistry {
    ToolRegistry::builder()
        .register(SearchNewsTool::new(Arc::clone(&tools)))
        .register(GetTopHeadlinesTool::new(tools))
        .finish()
}
