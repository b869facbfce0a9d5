//! Relative Strength Index (RSI) support check.

use crate::error::{AppError, Result};
use crate::types::{round2, MomentumResult};

/// RSI support evaluator.
///
/// Uses simple rolling means of gains and losses (not Wilder smoothing) over
/// the last `period` close-to-close changes. The reading counts as support
/// when its two-decimal value falls inside `[band_low, band_high]`, so the
/// flag always agrees with the reported reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiSupport {
    period: usize,
    band_low: f64,
    band_high: f64,
}

impl Default for RsiSupport {
    fn default() -> Self {
        Self {
            period: 14,
            band_low: 38.0,
            band_high: 42.0,
        }
    }
}

impl RsiSupport {
    pub fn new(period: usize, band_low: f64, band_high: f64) -> Self {
        Self {
            period: period.max(1),
            band_low,
            band_high,
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Minimum number of closes needed for one reading.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    pub fn support_zone(&self) -> String {
        format!("{}–{}", self.band_low, self.band_high)
    }

    /// RSI of the most recent window.
    pub fn calculate_rsi(&self, closes: &[f64]) -> Result<f64> {
        if closes.len() < self.min_periods() {
            return Err(AppError::InsufficientData {
                required: self.min_periods(),
                actual: closes.len(),
            });
        }

        let window = &closes[closes.len() - self.min_periods()..];
        let (gains, losses) = window
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold((0.0, 0.0), |(g, l), change| {
                if change > 0.0 {
                    (g + change, l)
                } else {
                    (g, l - change)
                }
            });

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return Ok(100.0);
        }

        let rs = avg_gain / avg_loss;
        Ok((100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0))
    }

    /// Evaluate the support flag. Too little data gives a null reading, never an error.
    pub fn evaluate(&self, closes: &[f64]) -> MomentumResult {
        let current_rsi = self.calculate_rsi(closes).ok();
        let is_rsi_support = current_rsi
            .map(round2)
            .map(|shown| shown >= self.band_low && shown <= self.band_high)
            .unwrap_or(false);

        MomentumResult {
            current_rsi,
            is_rsi_support,
            support_zone: self.support_zone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn downtrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    /// Seven +1.0 / -1.5 pairs: gains 7, losses 10.5, RSI 40.
    fn rsi_forty_tail() -> Vec<f64> {
        let mut closes = vec![100.0];
        for _ in 0..7 {
            let last = *closes.last().unwrap();
            closes.push(last + 1.0);
            closes.push(last - 0.5);
        }
        closes
    }

    #[test]
    fn test_rsi_min_periods() {
        assert_eq!(RsiSupport::default().min_periods(), 15);
        assert_eq!(RsiSupport::new(7, 38.0, 42.0).min_periods(), 8);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let err = RsiSupport::default().calculate_rsi(&uptrend(10)).unwrap_err();
        assert!(matches!(err, AppError::InsufficientData { required: 15, actual: 10 }));
    }

    #[test]
    fn test_rsi_insufficient_data_is_null_reading() {
        let result = RsiSupport::default().evaluate(&uptrend(10));
        assert_eq!(result.current_rsi, None);
        assert!(!result.is_rsi_support);
        assert_eq!(result.support_zone, "38–42");
    }

    #[test]
    fn test_rsi_uptrend_saturates() {
        let rsi = RsiSupport::default().calculate_rsi(&uptrend(50)).unwrap();
        assert_eq!(rsi, 100.0);
    }

    #[test]
    fn test_rsi_downtrend_is_zero() {
        let rsi = RsiSupport::default().calculate_rsi(&downtrend(50)).unwrap();
        assert_eq!(rsi, 0.0);
    }

    #[test]
    fn test_rsi_flat_prices_guarded() {
        let rsi = RsiSupport::default().calculate_rsi(&[50.0; 20]).unwrap();
        assert_eq!(rsi, 100.0);
    }

    #[test]
    fn test_rsi_forty_is_support() {
        let closes = rsi_forty_tail();
        assert_eq!(closes.len(), 15);
        let result = RsiSupport::default().evaluate(&closes);
        let rsi = result.current_rsi.unwrap();
        assert!((rsi - 40.0).abs() < 1e-9, "got {}", rsi);
        assert!(result.is_rsi_support);
    }

    #[test]
    fn test_rsi_uses_only_latest_window() {
        let mut closes = downtrend(40);
        closes.extend(rsi_forty_tail().iter().map(|c| c - 50.0));
        let rsi = RsiSupport::default().calculate_rsi(&closes).unwrap();
        assert!((rsi - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_value_range() {
        let closes: Vec<f64> = (0..120).map(|i| 50.0 + 10.0 * ((i as f64) * 0.7).sin()).collect();
        let rsi = RsiSupport::default();
        for end in rsi.min_periods()..closes.len() {
            let value = rsi.calculate_rsi(&closes[..end]).unwrap();
            assert!((0.0..=100.0).contains(&value));
        }
    }

    /// One rise then one fall whose sizes sum to 100, then flat: RSI equals the rise.
    fn single_swing(rise: f64) -> Vec<f64> {
        let peak = 200.0 + rise;
        let trough = peak - (100.0 - rise);
        let mut closes = vec![200.0, peak];
        closes.extend(std::iter::repeat(trough).take(13));
        closes
    }

    #[test]
    fn test_band_uses_reported_precision() {
        let result = RsiSupport::default().evaluate(&single_swing(37.997));
        let rsi = result.current_rsi.unwrap();
        assert!(rsi < 38.0, "got {}", rsi);
        assert_eq!(round2(rsi), 38.0);
        assert!(result.is_rsi_support);

        let view = crate::types::RsiView::from(&result);
        assert_eq!(view.current_rsi, Some(38.0));
        assert!(view.is_rsi_support);
    }

    #[test]
    fn test_just_below_band_after_rounding() {
        let result = RsiSupport::default().evaluate(&single_swing(37.994));
        assert_eq!(result.current_rsi.map(round2), Some(37.99));
        assert!(!result.is_rsi_support);
    }

    #[test]
    fn test_band_edges_inclusive() {
        let rsi = RsiSupport::new(2, 50.0, 60.0);
        // one gain of 1, one loss of 1 => RSI 50
        let result = rsi.evaluate(&[10.0, 11.0, 10.0]);
        assert!(result.is_rsi_support);
    }
}
