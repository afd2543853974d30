use mockito::Server;

use recipe_search::{ApiConfig, HttpFetcher, RecipeSource, SearchError};

fn config_for(server: &Server) -> ApiConfig {
    ApiConfig {
        api_key: Some("fake_api_key".to_string()),
        base_url: server.url(),
        host: "test.host".to_string(),
        timeout: 5,
    }
}

#[tokio::test]
async fn test_configured_fetcher_sends_key_and_host() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("x-rapidapi-key", "fake_api_key")
        .match_header("x-rapidapi-host", "test.host")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"title": "Lentil Soup", "difficulty": "Easy"}]"#)
        .create();

    let fetcher = HttpFetcher::new(&config_for(&server)).unwrap();
    let recipes = fetcher.search("").await.unwrap();

    assert_eq!(recipes.len(), 1);
    mock.assert();
}

#[tokio::test]
async fn test_missing_key_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server.mock("GET", "/").expect(0).create();

    let config = ApiConfig {
        api_key: None,
        ..config_for(&server)
    };
    let err = match HttpFetcher::new(&config) {
        Err(err) => err,
        Ok(_) => panic!("expected a missing key error"),
    };

    assert!(matches!(err, SearchError::MissingApiKey));
    mock.assert();
}

#[tokio::test]
async fn test_empty_query_returns_collection_in_original_order() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{"title": "Zucchini Fritters"}, {"title": "Aubergine Curry"}, {"title": "Miso Ramen"}]"#,
        )
        .create();

    let fetcher = HttpFetcher::new(&config_for(&server)).unwrap();
    let recipes = fetcher.search("   ").await.unwrap();

    let titles: Vec<_> = recipes.iter().map(|r| r.display_title()).collect();
    assert_eq!(titles, ["Zucchini Fritters", "Aubergine Curry", "Miso Ramen"]);
}
