//! Integration tests for the Binance kline client

use chrono::DateTime;
use trendwatch::error::FetchError;
use trendwatch::services::binance::BinanceFuturesClient;
use trendwatch::services::market_data::MarketDataSource;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::mock_klines;

#[tokio::test]
async fn fetch_candles_parses_kline_rows() {
    let server = MockServer::start().await;
    mock_klines(&server, "4h", &[100.0, 101.0, 102.5]).await;

    let client = BinanceFuturesClient::with_client(server.uri(), reqwest::Client::new());
    let candles = client
        .fetch_candles("BTCUSDT", "4h", None, None, 3)
        .await
        .expect("klines fetched");

    assert_eq!(candles.len(), 3);
    assert_eq!(candles[2].close, 102.5);
    assert!(candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[tokio::test]
async fn empty_range_is_not_an_error() {
    let server = MockServer::start().await;
    mock_klines(&server, "1d", &[]).await;

    let client = BinanceFuturesClient::with_client(server.uri(), reqwest::Client::new());
    let candles = client
        .fetch_candles("BTCUSDT", "1d", None, None, 50)
        .await
        .expect("empty result is ok");
    assert!(candles.is_empty());
}

#[tokio::test]
async fn http_failure_surfaces_as_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/klines"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = BinanceFuturesClient::with_client(server.uri(), reqwest::Client::new());
    let err = client
        .fetch_candles("BTCUSDT", "4h", None, None, 14)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn malformed_payload_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([["not-a-kline"]])))
        .mount(&server)
        .await;

    let client = BinanceFuturesClient::with_client(server.uri(), reqwest::Client::new());
    let err = client
        .fetch_candles("BTCUSDT", "4h", None, None, 14)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn backfill_range_is_forwarded() {
    let server = MockServer::start().await;
    mock_klines(&server, "1d", &[]).await;

    let client = BinanceFuturesClient::with_client(server.uri(), reqwest::Client::new());
    let start = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
    let end = DateTime::from_timestamp_millis(1_700_086_400_000).unwrap();
    client
        .fetch_candles("BTCUSDT", "1d", Some(start), Some(end), 1000)
        .await
        .expect("fetch with range");

    let requests = server.received_requests().await.expect("recorded requests");
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("startTime=1700000000000"));
    assert!(query.contains("endTime=1700086400000"));
    assert!(query.contains("symbol=BTCUSDT"));
    assert!(query.contains("limit=1000"));
}
