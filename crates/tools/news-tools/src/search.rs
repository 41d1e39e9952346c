//! Keyword search over GNews.

use gnews_async::types::{ResponseMode, SearchRequest};
use tracing::debug;

use crate::NewsTools;
use crate::error::ToolError;
use crate::types::{NewsOutput, SearchNewsInput};

/// Search GNews articles by keyword.
///
/// # Errors
/// Returns `ToolError::InvalidInput` for rejected parameters, `ToolError::Config` when
/// no API key is set, and `ToolError::External` when GNews or the network fails.
#[tracing::instrument(skip_all, fields(query = %input.query, mode = ?tools.mode))]
pub async fn search_news(
    tools: &NewsTools,
    input: SearchNewsInput,
) -> Result<NewsOutput, ToolError> {
    let req = SearchRequest::from(input);
    let search = tools.client.search();

    let out = match tools.mode {
        ResponseMode::Normalized => {
            let env = search.articles(&req).await?;
            debug!(
                total = env.total_articles,
                returned = env.articles.len(),
                "search complete"
            );
            NewsOutput::Articles(env)
        }
        ResponseMode::Raw => NewsOutput::Raw(search.create(&req).await?),
    };
    Ok(out)
}
