//! Wire shapes for API responses.
//!
//! Rounding and date formatting happen here; the analysis pipeline works on
//! full-precision values. The RSI band check reuses [`round2`] so its flag
//! matches the reading shown to callers.

use serde::Serialize;

use super::{
    AnalysisResult, Candle, CandleSeries, FibHit, FinalSignal, MomentumResult, RetracementResult,
    SupportLevel,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelView {
    pub date: String,
    pub price: f64,
    pub zone_low: f64,
    pub zone_high: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touches: Option<usize>,
}

impl From<&SupportLevel> for LevelView {
    fn from(level: &SupportLevel) -> Self {
        Self {
            date: level.date.format(DATE_FORMAT).to_string(),
            price: round2(level.price),
            zone_low: round2(level.zone_low),
            zone_high: round2(level.zone_high),
            touches: level.touches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiView {
    pub current_rsi: Option<f64>,
    pub is_rsi_support: bool,
    pub support_zone: String,
}

impl From<&MomentumResult> for RsiView {
    fn from(rsi: &MomentumResult) -> Self {
        Self {
            current_rsi: rsi.current_rsi.map(round2),
            is_rsi_support: rsi.is_rsi_support,
            support_zone: rsi.support_zone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FibHitView {
    pub level: String,
    pub level_price: f64,
    pub current_price: f64,
}

impl From<&FibHit> for FibHitView {
    fn from(hit: &FibHit) -> Self {
        Self {
            level: hit.level.to_string(),
            level_price: round2(hit.level_price),
            current_price: round2(hit.current_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FibonacciView {
    pub swing_high: Option<f64>,
    pub swing_low: Option<f64>,
    pub fib_hit: Option<FibHitView>,
}

impl From<&RetracementResult> for FibonacciView {
    fn from(fib: &RetracementResult) -> Self {
        Self {
            swing_high: fib.swing_high.map(round2),
            swing_low: fib.swing_low.map(round2),
            fib_hit: fib.fib_hit.as_ref().map(FibHitView::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleView {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl CandleView {
    /// Price fields only.
    pub fn ohlc(candle: &Candle) -> Self {
        Self {
            time: candle.date.format(DATE_FORMAT).to_string(),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: None,
        }
    }

    pub fn full(candle: &Candle) -> Self {
        Self {
            volume: candle.volume,
            ..Self::ohlc(candle)
        }
    }
}

/// Body of `GET /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub symbol: String,
    pub supports: Vec<LevelView>,
    pub rsi: RsiView,
    pub fibonacci: FibonacciView,
    pub final_signal: FinalSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candles: Option<Vec<CandleView>>,
}

impl AnalysisResponse {
    pub fn new(result: &AnalysisResult, series: Option<&CandleSeries>) -> Self {
        Self {
            symbol: result.symbol.clone(),
            supports: result.supports.iter().map(LevelView::from).collect(),
            rsi: RsiView::from(&result.rsi),
            fibonacci: FibonacciView::from(&result.fibonacci),
            final_signal: result.final_signal,
            candles: series.map(|s| s.candles().iter().map(CandleView::ohlc).collect()),
        }
    }
}

/// Body of `GET /api/candles`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlesResponse {
    pub symbol: String,
    pub count: usize,
    pub data: Vec<CandleView>,
}

impl CandlesResponse {
    pub fn new(symbol: &str, series: &CandleSeries) -> Self {
        let data: Vec<CandleView> = series.candles().iter().map(CandleView::full).collect();
        Self {
            symbol: symbol.to_string(),
            count: data.len(),
            data,
        }
    }
}
