//! Synthetic daily series shared by the integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use ledge::types::{Candle, CandleSeries};

pub fn start_date() -> NaiveDate {
    // a Monday
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// One candle per calendar day with a 1% band around each close.
pub fn daily_from_closes(closes: &[f64]) -> Vec<Candle> {
    daily_with_band(closes, 0.01, 0.01)
}

/// One candle per calendar day, high `up` and low `down` (fractions) away from each close.
pub fn daily_with_band(closes: &[f64], up: f64, down: f64) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let day = start_date() + Duration::days(i as i64);
            Candle::new(day, c, c * (1.0 + up), c * (1.0 - down), c).with_volume(1_000.0)
        })
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> CandleSeries {
    CandleSeries::new(daily_from_closes(closes)).unwrap()
}

/// 120 flat days at 100 followed by seven +1.0 / -1.5 pairs, which puts the
/// 14-period RSI at exactly 40.
pub fn flat_then_rsi_forty() -> Vec<f64> {
    let mut closes = vec![100.0; 120];
    for _ in 0..7 {
        let last = *closes.last().unwrap();
        closes.push(last + 1.0);
        closes.push(last - 0.5);
    }
    closes
}

/// 20 flat weeks at 100 with lows 1.7% and highs 0.3% away, then seven
/// +0.10 / -0.15 pairs for a 14-period RSI of 40.
///
/// Pivot lows (98.3), basins (about 100) and pivot highs (100.3) form one
/// cluster whose mean sits more than 1% above the lows and within 1% below
/// everything else, so the cluster summary is the only level left.
pub fn clustered_base_then_rsi_forty() -> Vec<Candle> {
    let mut closes = vec![100.0; 140];
    for _ in 0..7 {
        let last = *closes.last().unwrap();
        closes.push(last + 0.1);
        closes.push(last - 0.05);
    }
    daily_with_band(&closes, 0.003, 0.017)
}

/// Rally to 200, pull back to 150, then a steady climb to 400.
///
/// Produces pivots around the first peak and trough, an RSI of 100 at the end
/// and a last close far from every retracement level.
pub fn peak_trough_rally() -> Vec<f64> {
    let mut closes: Vec<f64> = (0..100).map(|i| 100.0 + i as f64).collect();
    closes.extend((0..50).map(|i| 200.0 - i as f64));
    closes.extend((0..150).map(|i| 150.0 + i as f64 * 250.0 / 149.0));
    closes
}

/// Several years of oscillating, drifting prices.
pub fn wavy_history(days: usize) -> Vec<f64> {
    (0..days)
        .map(|i| {
            let t = i as f64;
            let drift = 100.0 * (1.0 + t / 1500.0);
            drift * (1.0 + 0.25 * (t / 90.0).sin() + 0.05 * (t / 11.0).sin())
        })
        .collect()
}
