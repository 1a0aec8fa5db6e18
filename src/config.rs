//! Environment-backed configuration.

use std::env;

use crate::services::binance::DEFAULT_BASE_URL;

/// Deployment environment name, used to pick the log formatter.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// PGWire connection string for QuestDB.
pub fn get_questdb_url() -> String {
    env::var("QUESTDB_URL").unwrap_or_else(|_| {
        "host=127.0.0.1 port=8812 user=admin password=quest dbname=qdb".to_string()
    })
}

pub fn get_binance_base_url() -> String {
    env::var("BINANCE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Symbol, kline intervals and polling cadences for the watcher.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub symbol: String,
    /// Kline interval feeding the RSI series.
    pub rsi_interval: String,
    /// Kline interval feeding the Fibonacci series.
    pub fibonacci_interval: String,
    /// Kline interval feeding the moving-average series.
    pub trend_interval: String,
    /// Fast cadence: RSI + Fibonacci refresh.
    pub momentum_cadence_seconds: u64,
    /// Slow cadence: moving-average refresh.
    pub trend_cadence_seconds: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSDT".to_string(),
            rsi_interval: "4h".to_string(),
            fibonacci_interval: "15m".to_string(),
            trend_interval: "1d".to_string(),
            momentum_cadence_seconds: 10,
            trend_cadence_seconds: 60,
        }
    }
}

impl WatchConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            symbol: env::var("SYMBOL").unwrap_or(defaults.symbol),
            rsi_interval: env::var("RSI_INTERVAL").unwrap_or(defaults.rsi_interval),
            fibonacci_interval: env::var("FIBONACCI_INTERVAL")
                .unwrap_or(defaults.fibonacci_interval),
            trend_interval: env::var("TREND_INTERVAL").unwrap_or(defaults.trend_interval),
            momentum_cadence_seconds: env::var("MOMENTUM_CADENCE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.momentum_cadence_seconds),
            trend_cadence_seconds: env::var("TREND_CADENCE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.trend_cadence_seconds),
        }
    }
}
