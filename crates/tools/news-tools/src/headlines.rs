//! Top headlines by category.

use gnews_async::types::{HeadlinesRequest, ResponseMode};
use tracing::debug;

use crate::NewsTools;
use crate::error::ToolError;
use crate::types::{GetTopHeadlinesInput, NewsOutput};

/// Fetch current top headlines.
///
/// # Errors
/// Same as [`crate::search::search_news`].
#[tracing::instrument(skip_all, fields(category = ?input.category, mode = ?tools.mode))]
pub async fn get_top_headlines(
    tools: &NewsTools,
    input: GetTopHeadlinesInput,
) -> Result<NewsOutput, ToolError> {
    let req = HeadlinesRequest::from(input);
    let headlines = tools.client.top_headlines();

    let out = match tools.mode {
        ResponseMode::Normalized => {
            let env = headlines.articles(&req).await?;
            debug!(
                total = env.total_articles,
                returned = env.articles.len(),
                "headlines complete"
            );
            NewsOutput::Articles(env)
        }
        ResponseMode::Raw => NewsOutput::Raw(headlines.create(&req).await?),
    };
    Ok(out)
}
