//! Market-data collaborators.

pub mod binance;
pub mod market_data;

pub use binance::BinanceFuturesClient;
pub use market_data::MarketDataSource;
