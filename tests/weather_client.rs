//! Contract tests for the weather client against a mock provider.
//!
//! `fetch_temperature` is a total function: every transport and provider
//! failure mode must come back as a classified reading, never an error.

use cityweather::config::WeatherConfig;
use cityweather::models::FetchOutcome;
use cityweather::weather::WeatherClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    let config = WeatherConfig {
        api_key: Some("test_api_key_123".to_string()),
        base_url: server.uri(),
        timeout_seconds: 5,
        cache_ttl_seconds: None,
    };
    WeatherClient::new(&config).unwrap()
}

fn current_weather_body(name: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "main": { "temp": temp, "humidity": 40 },
        "weather": [{ "description": "clear sky" }]
    })
}

#[tokio::test]
async fn test_success_reading_carries_provider_name_and_temperature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test_api_key_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_body("Paris", 21.5)))
        .expect(1)
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("Paris").await;

    assert_eq!(reading.outcome, FetchOutcome::Success);
    assert_eq!(reading.temperature, Some(21.5));
    assert_eq!(reading.place_name.as_deref(), Some("Paris"));
}

#[tokio::test]
async fn test_name_is_url_encoded_but_sent_verbatim() {
    let server = MockServer::start().await;

    // wiremock compares the decoded query value, so a match here proves the
    // raw name round-tripped through the URL encoding intact
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "São Paulo & Región"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(current_weather_body("São Paulo", 27.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("São Paulo & Región").await;
    assert_eq!(reading.outcome, FetchOutcome::Success);
}

#[tokio::test]
async fn test_body_without_temperature_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": "200",
            "message": "no data for query"
        })))
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("Nowhere").await;

    assert_eq!(reading.outcome, FetchOutcome::NotFound);
    assert!(reading.temperature.is_none());
}

#[tokio::test]
async fn test_non_2xx_status_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("Paris").await;
    assert_eq!(reading.outcome, FetchOutcome::ProviderError);
    assert!(reading.temperature.is_none());
}

#[tokio::test]
async fn test_unparseable_body_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("Paris").await;
    assert_eq!(reading.outcome, FetchOutcome::ProviderError);
}

#[tokio::test]
async fn test_unreachable_provider_is_provider_error() {
    // Bind-then-drop leaves a port nothing is listening on
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let config = WeatherConfig {
        api_key: Some("test_api_key_123".to_string()),
        base_url: uri,
        timeout_seconds: 1,
        cache_ttl_seconds: None,
    };
    let client = WeatherClient::new(&config).unwrap();

    let reading = client.fetch_temperature("Paris").await;
    assert_eq!(reading.outcome, FetchOutcome::ProviderError);
}

#[tokio::test]
async fn test_empty_name_still_returns_a_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let reading = client_for(&server).fetch_temperature("").await;
    assert_eq!(reading.outcome, FetchOutcome::ProviderError);
}
