//! Windowed swing-high/swing-low detection.

use crate::types::{Candle, PivotKind, PivotPoint};

/// Finds bars whose high (or low) is the extreme of a symmetric window.
///
/// A bar at index `i` is a pivot high when `high[i]` equals the maximum high
/// over `[i - window, i + window]`; ties with neighbours still count. The first
/// and last `window` bars never produce pivots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotDetector {
    window: usize,
}

impl Default for PivotDetector {
    fn default() -> Self {
        Self { window: 4 }
    }
}

impl PivotDetector {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns `(highs, lows)`, each ordered by date.
    pub fn detect(&self, weekly: &[Candle]) -> (Vec<PivotPoint>, Vec<PivotPoint>) {
        let mut highs = Vec::new();
        let mut lows = Vec::new();
        let w = self.window;

        if weekly.len() <= 2 * w {
            return (highs, lows);
        }

        for i in w..weekly.len() - w {
            let slice = &weekly[i - w..=i + w];
            let max_high = slice.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let min_low = slice.iter().map(|c| c.low).fold(f64::MAX, f64::min);
            let bar = &weekly[i];

            if bar.high == max_high {
                highs.push(PivotPoint {
                    date: bar.date,
                    price: bar.high,
                    kind: PivotKind::High,
                });
            }
            if bar.low == min_low {
                lows.push(PivotPoint {
                    date: bar.date,
                    price: bar.low,
                    kind: PivotKind::Low,
                });
            }
        }

        (highs, lows)
    }
}
