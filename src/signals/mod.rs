//! Signal derivation from indicator values.

pub mod crossover;
pub mod generator;

pub use crossover::detect_crossover;
pub use generator::{
    fibonacci_signal, rsi_signal, FIB_TOUCH_THRESHOLD_PCT, RSI_OVERBOUGHT, RSI_OVERSOLD,
};
