//! Market data source interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::models::Candle;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch klines for a symbol/interval pair, oldest first. An empty result
    /// means the exchange has no data in range; it is not an error.
    async fn fetch_candles(
        &self,
        symbol: &str,
        interval: &str,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<Candle>, FetchError>;
}
