use serde::{Deserialize, Serialize};

use super::SupportLevel;

/// Current RSI reading and whether it sits in the support band.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumResult {
    /// `None` when the series is too short to compute RSI.
    pub current_rsi: Option<f64>,
    pub is_rsi_support: bool,
    /// Human-readable band, e.g. "38–42".
    pub support_zone: String,
}

/// The retracement level the current price sits near.
#[derive(Debug, Clone, PartialEq)]
pub struct FibHit {
    /// Ratio label, e.g. "0.382".
    pub level: &'static str,
    pub level_price: f64,
    pub current_price: f64,
}

/// Swing range over the lookback window and the first level hit, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetracementResult {
    pub swing_high: Option<f64>,
    pub swing_low: Option<f64>,
    pub fib_hit: Option<FibHit>,
}

/// Composite recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FinalSignal {
    Buy,
    Wait,
}

impl std::fmt::Display for FinalSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalSignal::Buy => write!(f, "BUY"),
            FinalSignal::Wait => write!(f, "WAIT"),
        }
    }
}

/// Everything one analysis run produces for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub symbol: String,
    pub supports: Vec<SupportLevel>,
    pub rsi: MomentumResult,
    pub fibonacci: RetracementResult,
    /// Number of agreeing signals (0-3).
    pub score: u8,
    pub final_signal: FinalSignal,
}
