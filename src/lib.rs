//! Trendwatch polls Binance futures klines for a fixed symbol, persists a
//! rolling price history in QuestDB and derives RSI, moving-average and
//! Fibonacci retracement signals from it.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
