use gnews_async::types::HeadlinesRequest;
use gnews_async::{Client, GNewsConfig, GNewsError};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<GNewsConfig> {
    let config = GNewsConfig::new()
        .with_api_base(server.uri())
        .with_api_key("test-api-key");
    Client::with_config(config)
}

#[tokio::test]
async fn business_category_reaches_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "business"))
        .and(query_param("lang", "en"))
        .and(query_param("max", "10"))
        .and(query_param_is_missing("q"))
        .and(query_param_is_missing("sortby"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalArticles": 1,
            "articles": [{
                "title": "Markets rally",
                "description": null,
                "url": "https://example.com/markets",
                "publishedAt": "2024-05-01T10:00:00Z",
                "lang": "en",
                "source": { "name": "Example Business" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let env = client
        .top_headlines()
        .articles(&HeadlinesRequest::new().with_category("business"))
        .await
        .unwrap();

    assert_eq!(env.total_articles, 1);
    let article = &env.articles[0];
    assert_eq!(article.language, Some(Some("en".to_string())));
    assert_eq!(article.description, None);
    assert_eq!(article.image, None);
    assert_eq!(article.source.name.as_deref(), Some("Example Business"));
    assert_eq!(article.source.url, None);
}

#[tokio::test]
async fn query_is_trimmed_and_sent_last() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "technology"))
        .and(query_param("country", "gb"))
        .and(query_param("q", "chips"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "articles": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let req = HeadlinesRequest::new()
        .with_category("technology")
        .with_country("GB")
        .with_query("  chips ");
    let body = client.top_headlines().create(&req).await.unwrap();

    assert_eq!(body, serde_json::json!({"articles": []}));
}

#[tokio::test]
async fn unknown_category_is_rejected_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .top_headlines()
        .create(&HeadlinesRequest::new().with_category("politics"))
        .await
        .unwrap_err();

    match err {
        GNewsError::Validation { field, reason } => {
            assert_eq!(field, "category");
            assert!(reason.contains("health"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
