//! API resource implementations for the GNews client

/// Search API resource
pub mod search;
/// Top-headlines API resource
pub mod top_headlines;

pub use search::Search;
pub use top_headlines::TopHeadlines;
