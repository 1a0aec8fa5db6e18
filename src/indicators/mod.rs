//! Pure indicator computations over price windows.

pub mod momentum;
pub mod retracement;
pub mod trend;

pub use momentum::rsi::{compute_rsi, RSI_PERIOD};
pub use retracement::fibonacci::compute_fibonacci_levels;
pub use trend::sma::compute_sma;
