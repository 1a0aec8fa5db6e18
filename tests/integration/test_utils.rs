use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use trendwatch::db::PriceHistoryStore;
use trendwatch::error::StoreError;
use trendwatch::models::PricePoint;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// In-memory stand-in for the QuestDB-backed store.
#[derive(Default)]
pub struct MemoryPriceStore {
    series: Mutex<HashMap<String, Vec<PricePoint>>>,
}

#[allow(dead_code)]
impl MemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, series: &str) -> usize {
        self.series
            .lock()
            .await
            .get(series)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub async fn points(&self, series: &str) -> Vec<PricePoint> {
        self.series
            .lock()
            .await
            .get(series)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl PriceHistoryStore for MemoryPriceStore {
    async fn append(&self, series: &str, point: &PricePoint) -> Result<(), StoreError> {
        self.series
            .lock()
            .await
            .entry(series.to_string())
            .or_default()
            .push(*point);
        Ok(())
    }

    async fn recent(&self, series: &str, limit: usize) -> Result<Vec<PricePoint>, StoreError> {
        let guard = self.series.lock().await;
        let mut points = guard.get(series).cloned().unwrap_or_default();
        points.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        points.truncate(limit);
        Ok(points)
    }

    async fn reset(&self, series: &str) -> Result<(), StoreError> {
        self.series
            .lock()
            .await
            .insert(series.to_string(), Vec::new());
        Ok(())
    }
}

/// Mount a kline payload for one interval in Binance's positional array
/// format: open time at index 0, close price as a string at index 4.
#[allow(dead_code)]
pub async fn mock_klines(server: &MockServer, interval: &str, closes: &[f64]) {
    let rows: Vec<serde_json::Value> = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let open_time = 1_700_000_000_000i64 + (i as i64) * 60_000;
            serde_json::json!([
                open_time,
                "0",
                "0",
                "0",
                close.to_string(),
                "0",
                open_time + 59_999,
                "0",
                0,
                "0",
                "0",
                "0"
            ])
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/fapi/v1/klines"))
        .and(query_param("interval", interval))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}
