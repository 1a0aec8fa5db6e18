//! Trendwatch watcher daemon
//!
//! Polls Binance futures klines on two cadences, persists price history in
//! QuestDB and reports indicator values and trading signals.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use trendwatch::config::{self, WatchConfig};
use trendwatch::core::coordinator::PollingCoordinator;
use trendwatch::core::scheduler::TickScheduler;
use trendwatch::db::{PriceHistoryStore, QuestPriceStore};
use trendwatch::logging;
use trendwatch::services::binance::BinanceFuturesClient;
use trendwatch::services::market_data::MarketDataSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!("Starting Trendwatch watcher");
    info!(environment = %env, "Environment");

    let watch_config = WatchConfig::from_env();
    info!(
        symbol = %watch_config.symbol,
        momentum_cadence = watch_config.momentum_cadence_seconds,
        trend_cadence = watch_config.trend_cadence_seconds,
        "Watch configuration loaded"
    );

    // A store that is down at startup is fatal; a store that goes down later
    // only costs the ticks it overlaps.
    info!("Connecting to QuestDB...");
    let store: Arc<dyn PriceHistoryStore> = match QuestPriceStore::connect().await {
        Ok(s) => {
            info!("QuestDB connected");
            Arc::new(s)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to QuestDB");
            return Err(format!("QuestDB connection required at startup: {e}").into());
        }
    };

    let source: Arc<dyn MarketDataSource> = Arc::new(BinanceFuturesClient::new());
    let coordinator = Arc::new(PollingCoordinator::new(source, store, watch_config.clone()));

    let momentum = TickScheduler::from_interval("momentum", watch_config.momentum_cadence_seconds)?;
    let trend = TickScheduler::from_interval("trend", watch_config.trend_cadence_seconds)?;

    let c = coordinator.clone();
    momentum
        .start(move || {
            let c = c.clone();
            async move { c.momentum_tick().await }
        })
        .await;

    let c = coordinator.clone();
    trend
        .start(move || {
            let c = c.clone();
            async move { c.trend_tick().await }
        })
        .await;

    info!("Watcher started, waiting for shutdown signal...");
    signal::ctrl_c().await?;

    info!("Shutting down watcher...");
    momentum.stop().await;
    trend.stop().await;
    info!("Watcher stopped");

    Ok(())
}
