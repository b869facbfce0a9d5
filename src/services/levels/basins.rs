//! Flat-region ("basin") detection over weekly closes.

use crate::types::{BasinPoint, Candle};

/// Flags runs of `window` weekly closes whose coefficient of variation
/// (sample stdev / mean) is below `std_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasinDetector {
    window: usize,
    std_threshold: f64,
}

impl Default for BasinDetector {
    fn default() -> Self {
        Self {
            window: 5,
            std_threshold: 0.015,
        }
    }
}

impl BasinDetector {
    pub fn new(window: usize, std_threshold: f64) -> Self {
        Self {
            window,
            std_threshold,
        }
    }

    /// One basin per qualifying window start. Overlapping windows are all reported.
    pub fn detect(&self, weekly: &[Candle]) -> Vec<BasinPoint> {
        // Sample stdev needs at least two values.
        if self.window < 2 || weekly.len() < self.window {
            return Vec::new();
        }

        weekly
            .windows(self.window)
            .filter_map(|run| {
                let closes: Vec<f64> = run.iter().map(|c| c.close).collect();
                let (mean, stdev) = mean_and_sample_stdev(&closes);
                (mean > 0.0 && stdev / mean < self.std_threshold).then(|| BasinPoint {
                    date: run[0].date,
                    price: mean,
                })
            })
            .collect()
    }
}

fn mean_and_sample_stdev(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}
