//! Momentum and retracement signals, and the vote that fuses them with levels.

pub mod fibonacci;
pub mod rsi;

pub use fibonacci::FibonacciRetracement;
pub use rsi::RsiSupport;

use crate::types::{FinalSignal, MomentumResult, RetracementResult, SupportLevel};

/// Votes needed for a BUY.
pub const BUY_THRESHOLD: u8 = 2;

/// Count the signals that agree: levels found, RSI in its support band, a
/// retracement level hit. Each counts once.
pub fn score_signals(
    supports: &[SupportLevel],
    rsi: &MomentumResult,
    fibonacci: &RetracementResult,
) -> u8 {
    [
        !supports.is_empty(),
        rsi.is_rsi_support,
        fibonacci.fib_hit.is_some(),
    ]
    .iter()
    .filter(|&&vote| vote)
    .count() as u8
}

impl FinalSignal {
    pub fn from_score(score: u8) -> Self {
        if score >= BUY_THRESHOLD {
            FinalSignal::Buy
        } else {
            FinalSignal::Wait
        }
    }
}
