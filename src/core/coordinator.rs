//! Per-tick orchestration: fetch, persist, derive, report.
//!
//! The two cadences share the price store but are not synchronized with each
//! other. Each tick appends before it reads its own series, so a tick always
//! observes its own update; a concurrent tick on the other cadence may observe
//! a window mid-update, which is tolerated — indicator output is advisory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::db::PriceHistoryStore;
use crate::error::StoreError;
use crate::indicators::{compute_fibonacci_levels, compute_rsi, compute_sma, RSI_PERIOD};
use crate::models::{Candle, CrossoverState, FibSignal, PricePoint};
use crate::services::MarketDataSource;
use crate::signals::{detect_crossover, fibonacci_signal, rsi_signal};

pub const RSI_SERIES: &str = "rsi-source";
pub const FIBONACCI_SERIES: &str = "fibonacci-source";
pub const MOVING_AVERAGE_SERIES: &str = "moving-averages";

pub const SHORT_TERM_PERIOD: usize = 50;
pub const LONG_TERM_PERIOD: usize = 200;

/// How many of the newest points feed the high/low range for retracement
/// levels.
pub const FIBONACCI_WINDOW: usize = 100;

pub struct PollingCoordinator {
    source: Arc<dyn MarketDataSource>,
    store: Arc<dyn PriceHistoryStore>,
    config: WatchConfig,
}

impl PollingCoordinator {
    pub fn new(
        source: Arc<dyn MarketDataSource>,
        store: Arc<dyn PriceHistoryStore>,
        config: WatchConfig,
    ) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    /// Fast-cadence tick: refresh the RSI and Fibonacci windows. Failures in
    /// one refresh are logged there and do not block the other.
    pub async fn momentum_tick(&self) {
        self.refresh_rsi().await;
        self.refresh_fibonacci().await;
    }

    /// Slow-cadence tick: refresh the moving-average window and look for a
    /// crossover.
    pub async fn trend_tick(&self) {
        if !self
            .refresh_series(
                MOVING_AVERAGE_SERIES,
                &self.config.trend_interval,
                SHORT_TERM_PERIOD,
            )
            .await
        {
            return;
        }

        let window = match self.store.recent(MOVING_AVERAGE_SERIES, LONG_TERM_PERIOD).await {
            Ok(w) => w,
            Err(e) => {
                warn!(series = MOVING_AVERAGE_SERIES, error = %e, "series read failed, tick skipped");
                return;
            }
        };

        let prices: Vec<f64> = window.iter().map(|p| p.price).collect();
        let short = compute_sma(&prices, SHORT_TERM_PERIOD);
        let long = compute_sma(&prices, LONG_TERM_PERIOD);

        match (short.first().copied().flatten(), long.first().copied().flatten()) {
            (Some(short_now), Some(long_now)) => {
                info!(
                    indicator = "sma",
                    short_period = SHORT_TERM_PERIOD,
                    short = short_now,
                    long_period = LONG_TERM_PERIOD,
                    long = long_now,
                    timestamp = %head_timestamp(&window),
                    "indicator refreshed"
                );
            }
            _ => {
                info!(
                    series = MOVING_AVERAGE_SERIES,
                    have = window.len(),
                    need = LONG_TERM_PERIOD,
                    "series warming up, crossover suppressed"
                );
            }
        }

        match detect_crossover(&short, &long) {
            CrossoverState::NoCross => debug!(signal = "no-cross", "no moving-average crossover"),
            cross => info!(signal = ?cross, "moving-average crossover detected"),
        }
    }

    async fn refresh_rsi(&self) {
        if !self
            .refresh_series(RSI_SERIES, &self.config.rsi_interval, RSI_PERIOD)
            .await
        {
            return;
        }

        let window = match self.store.recent(RSI_SERIES, RSI_PERIOD).await {
            Ok(w) => w,
            Err(e) => {
                warn!(series = RSI_SERIES, error = %e, "series read failed, tick skipped");
                return;
            }
        };

        // The store hands back newest-first; the delta walk wants oldest-first.
        let mut prices: Vec<f64> = window.iter().map(|p| p.price).collect();
        prices.reverse();

        let rsi = match compute_rsi(&prices) {
            Ok(value) => value,
            Err(e) => {
                info!(series = RSI_SERIES, %e, "signal suppressed");
                return;
            }
        };

        info!(
            indicator = "rsi",
            value = rsi,
            timestamp = %head_timestamp(&window),
            "indicator refreshed"
        );
        info!(signal = ?rsi_signal(rsi), rsi = rsi, "rsi signal");
    }

    async fn refresh_fibonacci(&self) {
        if !self
            .refresh_series(FIBONACCI_SERIES, &self.config.fibonacci_interval, RSI_PERIOD)
            .await
        {
            return;
        }

        let window = match self.store.recent(FIBONACCI_SERIES, FIBONACCI_WINDOW).await {
            Ok(w) => w,
            Err(e) => {
                warn!(series = FIBONACCI_SERIES, error = %e, "series read failed, tick skipped");
                return;
            }
        };

        if window.len() < 2 {
            info!(
                series = FIBONACCI_SERIES,
                have = window.len(),
                "insufficient data for retracement levels, signal suppressed"
            );
            return;
        }

        let prices: Vec<f64> = window.iter().map(|p| p.price).collect();
        let high = prices.iter().copied().fold(f64::MIN, f64::max);
        let low = prices.iter().copied().fold(f64::MAX, f64::min);
        let levels = compute_fibonacci_levels(high, low);
        let current = window[0];

        info!(
            indicator = "fibonacci",
            level_236 = levels.level_236,
            level_382 = levels.level_382,
            level_618 = levels.level_618,
            level_100 = levels.level_100,
            timestamp = %current.timestamp,
            "indicator refreshed"
        );

        match fibonacci_signal(current.price, &levels) {
            FibSignal::NoSignal => debug!(signal = "no-signal", price = current.price, "price clear of retracement levels"),
            hit => info!(signal = ?hit, price = current.price, "fibonacci signal"),
        }
    }

    /// Fetch the newest klines for a series and append the ones the store has
    /// not seen yet. Returns false when the tick should stop here.
    async fn refresh_series(&self, series: &str, interval: &str, limit: usize) -> bool {
        let candles = match self
            .source
            .fetch_candles(&self.config.symbol, interval, None, None, limit)
            .await
        {
            Ok(c) => c,
            Err(e) => {
                warn!(series = series, error = %e, "candle fetch failed, tick skipped");
                return false;
            }
        };

        if candles.is_empty() {
            debug!(series = series, "source returned no candles");
            return true;
        }

        match self.append_new(series, &candles).await {
            Ok(_) => true,
            Err(e) => {
                warn!(series = series, error = %e, "series append failed, tick skipped");
                false
            }
        }
    }

    /// Append only candles strictly newer than the series head, keeping the
    /// series deduplicated across overlapping fetch windows.
    async fn append_new(&self, series: &str, candles: &[Candle]) -> Result<usize, StoreError> {
        let head = self
            .store
            .recent(series, 1)
            .await?
            .first()
            .map(|p| p.timestamp);

        let mut ordered: Vec<&Candle> = candles.iter().collect();
        ordered.sort_by_key(|c| c.timestamp);

        let mut appended = 0;
        for candle in ordered {
            if head.is_some_and(|h| candle.timestamp <= h) {
                continue;
            }
            let point = PricePoint::from_candle(candle);
            if !point.is_valid() {
                warn!(
                    series = series,
                    price = point.price,
                    "discarding non-finite or negative price"
                );
                continue;
            }
            self.store.append(series, &point).await?;
            appended += 1;
        }

        if appended > 0 {
            debug!(series = series, appended = appended, "series extended");
        }
        Ok(appended)
    }
}

fn head_timestamp(window: &[PricePoint]) -> DateTime<Utc> {
    window.first().map(|p| p.timestamp).unwrap_or_else(Utc::now)
}
