//! Binance USDⓈ-M futures kline client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::FetchError;
use crate::models::Candle;
use crate::services::market_data::MarketDataSource;

pub const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";

pub struct BinanceFuturesClient {
    base_url: String,
    http: reqwest::Client,
}

impl BinanceFuturesClient {
    pub fn new() -> Self {
        Self::with_client(crate::config::get_binance_base_url(), reqwest::Client::new())
    }

    /// Build against an explicit base URL, used by tests to point the client
    /// at a mock server.
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }
}

impl Default for BinanceFuturesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for BinanceFuturesClient {
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<Candle>, FetchError> {
        let url = format!("{}/fapi/v1/klines", self.base_url);
        let mut query: Vec<(&str, String)> = vec![
            ("symbol", symbol.to_string()),
            ("interval", interval.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(start) = start_time {
            query.push(("startTime", start.timestamp_millis().to_string()));
        }
        if let Some(end) = end_time {
            query.push(("endTime", end.timestamp_millis().to_string()));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let rows: Vec<Vec<Value>> = response.json().await?;
        rows.iter().map(|row| parse_kline(row)).collect()
    }
}

/// Binance encodes klines as positional arrays: open time (epoch millis) at
/// index 0 and the close price, as a string, at index 4.
fn parse_kline(row: &[Value]) -> Result<Candle, FetchError> {
    let open_time = row
        .first()
        .and_then(Value::as_i64)
        .ok_or_else(|| FetchError::Malformed("missing kline open time".to_string()))?;
    let close = row
        .get(4)
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::Malformed("missing kline close price".to_string()))?
        .parse::<f64>()
        .map_err(|e| FetchError::Malformed(format!("unparseable close price: {e}")))?;
    let timestamp = DateTime::from_timestamp_millis(open_time)
        .ok_or_else(|| FetchError::Malformed(format!("open time {open_time} out of range")))?;

    Ok(Candle { timestamp, close })
}
