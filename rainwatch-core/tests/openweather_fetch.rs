//! Exercises `OpenWeatherProvider` against a local mock of the forecast
//! endpoint.

use mockito::{Matcher, Server};
use rainwatch_core::{
    model::ForecastRequest,
    provider::{FetchError, ForecastProvider, openweather::OpenWeatherProvider},
};

const FORECAST_PATH: &str = "/data/2.5/forecast";

fn request() -> ForecastRequest {
    ForecastRequest {
        latitude: 43.817_070,
        longitude: 125.323_547,
        periods: 4,
    }
}

fn provider_for(server: &Server) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url("test-key".to_string(), server.url())
}

#[tokio::test]
async fn successful_response_parses_into_periods() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", FORECAST_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appid".into(), "test-key".into()),
            Matcher::UrlEncoded("cnt".into(), "4".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"list":[{"dt":1717200000,"weather":[{"id":500,"description":"light rain"}]}]}"#,
        )
        .create_async()
        .await;

    let forecast = provider_for(&server)
        .fetch_forecast(&request())
        .await
        .expect("fetch should succeed");

    mock.assert_async().await;

    assert_eq!(forecast.periods.len(), 1);
    let condition = forecast.periods[0]
        .condition
        .as_ref()
        .expect("condition present");
    assert_eq!(condition.id, 500);
    assert_eq!(condition.description, "light rain");
}

#[tokio::test]
async fn server_error_maps_to_a_status_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", FORECAST_PATH)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let err = provider_for(&server)
        .fetch_forecast(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { .. }));
}

#[tokio::test]
async fn response_without_list_key_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", FORECAST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"cod":"200","message":0}"#)
        .create_async()
        .await;

    let err = provider_for(&server)
        .fetch_forecast(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn period_without_condition_entry_survives_without_matching() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", FORECAST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"list":[
                {"dt":1717200000,"weather":[]},
                {"dt":1717210800,"weather":[{"id":800,"description":"clear sky"}]}
            ]}"#,
        )
        .create_async()
        .await;

    let forecast = provider_for(&server)
        .fetch_forecast(&request())
        .await
        .expect("fetch should succeed");

    assert_eq!(forecast.periods.len(), 2);
    assert!(forecast.periods[0].condition.is_none());
    assert_eq!(
        forecast.periods[1].condition.as_ref().map(|c| c.id),
        Some(800)
    );
}
