//! One-shot backfill for the moving-average series.
//!
//! Drops the existing series and reloads the last 200 days of daily closes so
//! the long-window moving average has history from the first tick.

use chrono::Utc;
use dotenvy::dotenv;
use tracing::{info, warn};
use trendwatch::config::{self, WatchConfig};
use trendwatch::core::coordinator::MOVING_AVERAGE_SERIES;
use trendwatch::db::{PriceHistoryStore, QuestPriceStore};
use trendwatch::logging;
use trendwatch::models::PricePoint;
use trendwatch::services::binance::BinanceFuturesClient;
use trendwatch::services::market_data::MarketDataSource;

const BACKFILL_DAYS: i64 = 200;
const BACKFILL_FETCH_LIMIT: usize = 1000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!("Starting Trendwatch backfill");
    info!(environment = %env, "Environment");

    let watch_config = WatchConfig::from_env();

    info!("Connecting to QuestDB...");
    let store = match QuestPriceStore::connect().await {
        Ok(s) => {
            info!("QuestDB connected");
            s
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to QuestDB");
            return Err(format!("QuestDB connection required at startup: {e}").into());
        }
    };
    let source = BinanceFuturesClient::new();

    info!(series = MOVING_AVERAGE_SERIES, "Resetting series before backfill");
    store.reset(MOVING_AVERAGE_SERIES).await?;

    let end = Utc::now();
    let start = end - chrono::Duration::days(BACKFILL_DAYS);
    info!(
        symbol = %watch_config.symbol,
        interval = %watch_config.trend_interval,
        days = BACKFILL_DAYS,
        "Fetching historical candles"
    );
    let candles = source
        .fetch_candles(
            &watch_config.symbol,
            &watch_config.trend_interval,
            Some(start),
            Some(end),
            BACKFILL_FETCH_LIMIT,
        )
        .await?;

    if candles.is_empty() {
        warn!("Exchange returned no candles in the requested range");
        return Ok(());
    }

    let mut stored = 0usize;
    for candle in &candles {
        let point = PricePoint::from_candle(candle);
        if !point.is_valid() {
            warn!(price = point.price, "Skipping non-finite or negative price");
            continue;
        }
        store.append(MOVING_AVERAGE_SERIES, &point).await?;
        stored += 1;
    }

    info!(stored = stored, "Backfill complete");
    Ok(())
}
