use std::sync::Arc;

use gnews_async::GNewsConfig;
use gnews_async::types::ResponseMode;
use news_tools::types::{GetTopHeadlinesInput, NewsOutput, SearchNewsInput};
use news_tools::{NewsTools, ToolError, build_registry};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tools(server: &MockServer, mode: ResponseMode) -> Arc<NewsTools> {
    let config = GNewsConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    Arc::new(NewsTools::new(config).with_mode(mode))
}

fn upstream_body() -> serde_json::Value {
    json!({
        "totalArticles": 120,
        "articles": [{
            "title": "Heatwave grips Europe",
            "description": "Temperatures soar.",
            "content": "Record temperatures... [900 chars]",
            "url": "https://example.com/heat",
            "image": null,
            "publishedAt": "2024-07-10T09:00:00Z",
            "lang": "en",
            "source": { "name": "Example", "url": "https://example.com" }
        }]
    })
}

#[tokio::test]
async fn search_news_dispatch_returns_normalized_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "climate change"))
        .and(query_param("lang", "fr"))
        .and(query_param("max", "10"))
        .and(query_param("sortby", "relevance"))
        .and(query_param("from", "2024-01-01T00:00:00.000Z"))
        .and(query_param_is_missing("to"))
        .and(query_param("apikey", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body()))
        .expect(1)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let out = registry
        .dispatch_json(
            "search_news",
            json!({
                "query": "climate change",
                "language": "fr",
                "start_date": "2024-01-01",
                "sortby": "relevance"
            }),
        )
        .await
        .unwrap();

    assert_eq!(
        out,
        json!({
            "total_articles": 120,
            "articles": [{
                "title": "Heatwave grips Europe",
                "description": "Temperatures soar.",
                "content": "Record temperatures... [900 chars]",
                "url": "https://example.com/heat",
                "image": null,
                "publishedAt": "2024-07-10T09:00:00Z",
                "source": { "name": "Example", "url": "https://example.com" }
            }]
        })
    );
}

#[tokio::test]
async fn headlines_dispatch_carries_language() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "general"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body()))
        .expect(1)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let formatted = registry
        .dispatch_json_formatted("get_top_headlines", serde_json::Value::Null)
        .await
        .unwrap();

    assert_eq!(formatted.data["articles"][0]["language"], "en");
    assert!(formatted.text.starts_with("Total articles: 120 (showing 1)"));
    assert!(formatted.text.contains("Heatwave grips Europe"));
}

#[tokio::test]
async fn raw_mode_applies_to_both_operations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body()))
        .expect(2)
        .mount(&server)
        .await;

    let shared = tools(&server, ResponseMode::Raw);

    let out = news_tools::search::search_news(
        &shared,
        SearchNewsInput {
            query: "heat".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(out, NewsOutput::Raw(upstream_body()));

    let out = news_tools::headlines::get_top_headlines(&shared, GetTopHeadlinesInput::default())
        .await
        .unwrap();
    assert_eq!(out, NewsOutput::Raw(upstream_body()));
}

#[tokio::test]
async fn invalid_category_is_invalid_input_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let err = registry
        .dispatch_json("get_top_headlines", json!({"category": "politics"}))
        .await
        .unwrap_err();

    match err {
        ToolError::InvalidInput(msg) => assert!(msg.starts_with("'category' must be one of:")),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_api_key_is_config_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let registry = build_registry(Arc::new(NewsTools::new(
        GNewsConfig::new().with_api_base(server.uri()),
    )));
    let err = registry
        .dispatch_json("search_news", json!({"query": "ai"}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Config(_)), "got {err:?}");
}

#[tokio::test]
async fn upstream_rejection_is_external_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"errors": ["invalid api key"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let err = registry
        .dispatch_json("search_news", json!({"query": "ai"}))
        .await
        .unwrap_err();

    match err {
        ToolError::External(msg) => assert_eq!(msg, "GNews API error: invalid api key"),
        other => panic!("Expected External, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_date_is_invalid_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let err = registry
        .dispatch_json(
            "search_news",
            json!({"query": "ai", "end_date": "2024/01/31"}),
        )
        .await
        .unwrap_err();

    match err {
        ToolError::InvalidInput(msg) => assert_eq!(
            msg,
            "Invalid date format: 2024/01/31. Use YYYY-MM-DD format (e.g., 2024-01-15)"
        ),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn caller_cannot_override_article_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "ai"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body()))
        .expect(1)
        .mount(&server)
        .await;

    let registry = build_registry(tools(&server, ResponseMode::Normalized));
    let out = registry
        .dispatch_json("search_news", json!({"query": "ai", "max": 50}))
        .await
        .unwrap();

    assert_eq!(out["total_articles"], 120);
}
