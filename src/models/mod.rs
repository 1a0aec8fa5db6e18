//! Shared data models spanning the pipeline layers.

pub mod candle;
pub mod indicators;
pub mod signal;

pub use candle::{Candle, PricePoint};
pub use indicators::FibonacciLevels;
pub use signal::{CrossoverState, FibLevel, FibSignal, TradeSignal};
