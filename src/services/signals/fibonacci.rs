//! Fibonacci retracement proximity check.

use crate::types::{Candle, FibHit, RetracementResult};

/// Retracement ratios, checked in this order. The first level within
/// tolerance wins even if a later one is closer.
pub const FIB_RATIOS: [(&str, f64); 5] = [
    ("0.236", 0.236),
    ("0.382", 0.382),
    ("0.500", 0.5),
    ("0.618", 0.618),
    ("0.786", 0.786),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FibonacciRetracement {
    lookback: usize,
    tolerance_pct: f64,
}

impl Default for FibonacciRetracement {
    fn default() -> Self {
        Self {
            lookback: 200,
            tolerance_pct: 2.0,
        }
    }
}

impl FibonacciRetracement {
    pub fn new(lookback: usize, tolerance_pct: f64) -> Self {
        Self {
            lookback,
            tolerance_pct,
        }
    }

    /// Swing range over the most recent `lookback` candles and the first level hit.
    pub fn evaluate(&self, candles: &[Candle]) -> RetracementResult {
        let start = candles.len().saturating_sub(self.lookback);
        let window = &candles[start..];

        let Some(last) = window.last() else {
            return RetracementResult::default();
        };

        let swing_high = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let swing_low = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);

        RetracementResult {
            swing_high: Some(swing_high),
            swing_low: Some(swing_low),
            fib_hit: self.find_hit(swing_high, swing_low, last.close),
        }
    }

    /// First retracement level within `tolerance_pct` of `current_price`.
    ///
    /// A zero-width swing has no meaningful levels and never hits.
    pub fn find_hit(&self, swing_high: f64, swing_low: f64, current_price: f64) -> Option<FibHit> {
        let diff = swing_high - swing_low;
        if diff <= 0.0 {
            return None;
        }

        FIB_RATIOS.iter().find_map(|&(label, ratio)| {
            let level_price = swing_high - diff * ratio;
            if level_price <= 0.0 {
                return None;
            }
            let distance_pct = (current_price - level_price).abs() / level_price * 100.0;
            (distance_pct <= self.tolerance_pct).then_some(FibHit {
                level: label,
                level_price,
                current_price,
            })
        })
    }
}
