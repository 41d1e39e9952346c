//! Request and response types for the GNews API

/// Normalized article and envelope types
pub mod article;
/// Enumerated parameter values shared across endpoints
pub mod common;
/// `/top-headlines` request type
pub mod headlines;
/// Ordered query-parameter mapping
pub mod params;
/// `/search` request type
pub mod search;

pub use article::{Article, ArticleSource, ArticlesEnvelope};
pub use common::*;
pub use headlines::HeadlinesRequest;
pub use params::QueryParams;
pub use search::SearchRequest;
