//! End-to-end tests for the analysis pipeline over synthetic daily series.

mod common;

use common::*;
use ledge::config::AnalysisConfig;
use ledge::services::analyze;
use ledge::services::levels::consolidate::gap_pct;
use ledge::services::levels::{resample_weekly, PivotDetector};
use ledge::types::{AnalysisResponse, CandleSeries, FinalSignal, LevelSource};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_empty_series_waits() {
    let result = analyze("EMPTY", &CandleSeries::empty(), &AnalysisConfig::default());

    let json = serde_json::to_value(AnalysisResponse::new(&result, None)).unwrap();
    assert_eq!(json["symbol"], "EMPTY");
    assert_eq!(json["supports"], serde_json::json!([]));
    assert_eq!(json["rsi"]["is_rsi_support"], false);
    assert!(json["rsi"]["current_rsi"].is_null());
    assert!(json["fibonacci"]["fib_hit"].is_null());
    assert_eq!(json["final_signal"], "WAIT");
    assert!(json.get("candles").is_none());
}

#[test]
fn test_rsi_forty_with_clustered_level_buys() {
    let series = CandleSeries::new(clustered_base_then_rsi_forty()).unwrap();
    let result = analyze("BASE", &series, &AnalysisConfig::default());

    let rsi = result.rsi.current_rsi.unwrap();
    assert!((rsi - 40.0).abs() < 1e-9, "rsi was {}", rsi);
    assert!(result.rsi.is_rsi_support);

    let cluster = result
        .supports
        .iter()
        .find(|level| level.source == LevelSource::Cluster)
        .expect("a clustered level");
    assert!(cluster.touches.unwrap_or(0) >= 2);
    assert!(cluster.price > 98.3 * 1.01 && cluster.price < 100.0);

    assert!(result.score >= 2);
    assert_eq!(result.final_signal, FinalSignal::Buy);
}

#[test]
fn test_rsi_forty_on_flat_base_buys() {
    let series = series_from_closes(&flat_then_rsi_forty());
    let result = analyze("FLAT", &series, &AnalysisConfig::default());

    assert!(result.rsi.is_rsi_support);
    assert!(!result.supports.is_empty());
    assert_eq!(result.final_signal, FinalSignal::Buy);
}

#[test]
fn test_levels_alone_wait() {
    let series = series_from_closes(&peak_trough_rally());
    let config = AnalysisConfig::default();

    let weekly = resample_weekly(series.candles());
    let (highs, lows) = PivotDetector::default().detect(&weekly);
    assert!(!highs.is_empty() || !lows.is_empty());

    let result = analyze("RALLY", &series, &config);
    assert!(!result.supports.is_empty());
    assert_eq!(result.rsi.current_rsi, Some(100.0));
    assert!(!result.rsi.is_rsi_support);
    assert!(result.fibonacci.fib_hit.is_none());
    assert_eq!(result.score, 1);
    assert_eq!(result.final_signal, FinalSignal::Wait);
}

#[test]
fn test_too_short_for_rsi_still_answers() {
    let series = series_from_closes(&[10.0, 10.5, 10.2]);
    let result = analyze("SHORT", &series, &AnalysisConfig::default());
    assert_eq!(result.rsi.current_rsi, None);
    assert!(result.supports.is_empty());
    assert_eq!(result.fibonacci.swing_high, Some(10.5 * 1.01));
    assert_eq!(result.final_signal, FinalSignal::Wait);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_spacing_and_zones_on_long_history() {
    let series = series_from_closes(&wavy_history(1500));
    let result = analyze("WAVY", &series, &AnalysisConfig::default());
    assert!(!result.supports.is_empty());

    for pair in result.supports.windows(2) {
        assert!(pair[0].price > pair[1].price);
        let gap = gap_pct(pair[1].price, pair[0].price);
        assert!(
            (14.0..=17.0).contains(&gap),
            "gap {} between {} and {}",
            gap,
            pair[0].price,
            pair[1].price
        );
    }
    for level in &result.supports {
        assert!((level.zone_high / level.price - 1.025).abs() < 1e-9);
        assert!((level.zone_low / level.price - 0.975).abs() < 1e-9);
    }
}

#[test]
fn test_rsi_stays_in_bounds() {
    let closes = wavy_history(400);
    let config = AnalysisConfig::default();
    for end in [15, 40, 120, 399] {
        let rsi = config.rsi.evaluate(&closes[..end]).current_rsi.unwrap();
        assert!((0.0..=100.0).contains(&rsi));
    }
}

#[test]
fn test_analysis_is_deterministic() {
    let series = series_from_closes(&wavy_history(900));
    let config = AnalysisConfig::default();
    assert_eq!(analyze("A", &series, &config), analyze("A", &series, &config));
}

#[test]
fn test_include_candles_in_response() {
    let series = series_from_closes(&[10.0, 10.5]);
    let result = analyze("TWO", &series, &AnalysisConfig::default());
    let json = serde_json::to_value(AnalysisResponse::new(&result, Some(&series))).unwrap();

    let candles = json["candles"].as_array().unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0]["time"], "2024-01-01");
    assert_eq!(candles[1]["close"], 10.5);
    assert!(candles[0].get("volume").is_none());
}
