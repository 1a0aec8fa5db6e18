//! Error taxonomy for the watch pipeline.

use thiserror::Error;

/// Market-data source failures. A failed fetch skips the tick, it is never fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("kline request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("kline request returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed kline payload: {0}")]
    Malformed(String),
}

/// Price-history store failures. `Connect` at startup is fatal; everything else
/// is recovered per tick.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to QuestDB: {0}")]
    Connect(#[source] tokio_postgres::Error),
    #[error("series query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
    #[error("invalid series name: {0:?}")]
    InvalidSeries(String),
}

/// An indicator was asked for more history than the series holds. Expected
/// during warm-up; reported as informational, not as a failure.
#[derive(Debug, Error)]
#[error("insufficient data: {required} samples required, {actual} available")]
pub struct InsufficientData {
    pub required: usize,
    pub actual: usize,
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler disabled: cadence of 0 seconds")]
    Disabled,
    #[error("invalid cron expression {expr:?}: {source}")]
    InvalidCron {
        expr: String,
        #[source]
        source: cron::error::Error,
    },
}
