//! Host-level dispatch against a mocked travel API.

use attraction_tools::config::ToolsConfig;
use attraction_tools::tools::ToolRegistry;
use attraction_tools::travel::TravelClient;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ToolsConfig {
    ToolsConfig {
        api_base_url: server.uri(),
        api_key: "integration-key".into(),
        api_key_env: String::new(),
        request_timeout_secs: 5,
        ..Default::default()
    }
}

fn registry_for(server: &MockServer) -> ToolRegistry {
    let config = config_for(server);
    let client = TravelClient::from_config(&config).unwrap();
    ToolRegistry::new(client, &config)
}

#[tokio::test]
async fn reviews_round_trip_through_the_registry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/attraction/getAttractionReviews"))
        .and(query_param("id", "123"))
        .and(query_param("page", "2"))
        .and(header("x-rapidapi-key", "integration-key"))
        .and(header("x-rapidapi-host", "booking-com15.p.rapidapi.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "123",
                "content": "Great!",
                "language": "en",
                "numericRating": 5,
                "user": {"name": "Ann"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = registry_for(&server)
        .dispatch(
            "get_attraction_reviews",
            r#"{"arguments": {"id": " 123 ", "page": 2}}"#,
        )
        .await;

    assert_eq!(
        out,
        r#"{"id":"123","reviews":[{"content":"Great!","id":"123","language":"en","numericRating":5,"user":"Ann"}]}"#
    );
}

#[tokio::test]
async fn attraction_search_round_trip_through_the_registry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/attraction/searchLocation"))
        .and(query_param("query", "Amsterdam"))
        .and(query_param("languagecode", "en-us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Success",
            "data": {
                "products": [
                    {"title": "Rijksmuseum", "productId": "PRrijks", "cityName": "Amsterdam", "countryCode": "nl"},
                    {"title": "Canal Cruise", "productId": "PRcanal"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let out = registry_for(&server)
        .dispatch("get_attractions", r#"{"arguments": {"query": "Amsterdam"}}"#)
        .await;

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        json!({
            "query": "Amsterdam",
            "attractions": [
                {"title": "Rijksmuseum", "productId": "PRrijks", "cityName": "Amsterdam", "countryCode": "nl"},
                {"title": "Canal Cruise", "productId": "PRcanal", "cityName": null, "countryCode": null}
            ]
        })
    );
}

#[tokio::test]
async fn upstream_failure_never_escapes_as_a_panic_or_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    for (tool, context) in [
        ("get_attractions", r#"{"arguments": {"query": "Paris"}}"#),
        ("get_attraction_reviews", r#"{"arguments": {"id": "PR1"}}"#),
    ] {
        let out = registry.dispatch(tool, context).await;
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["error"]
            .as_str()
            .unwrap()
            .starts_with("HTTP request failed: "));
    }
}
