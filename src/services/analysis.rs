//! Runs every evaluator over one daily series and fuses the verdict.

use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::services::signals::score_signals;
use crate::types::{AnalysisResult, CandleSeries, FinalSignal};

/// Analyse a validated daily series.
///
/// Pure and stateless: empty or short input falls through to each stage's
/// "no signal" state and ends as WAIT.
pub fn analyze(symbol: &str, series: &CandleSeries, config: &AnalysisConfig) -> AnalysisResult {
    let candles = series.candles();
    debug!("Analysing {} daily candles for {}", candles.len(), symbol);

    let supports = config.levels.detect(candles);
    let rsi = config.rsi.evaluate(&series.closes());
    let fibonacci = config.fibonacci.evaluate(candles);

    let score = score_signals(&supports, &rsi, &fibonacci);
    let final_signal = FinalSignal::from_score(score);

    info!(
        "{}: {} levels, rsi={:?}, fib_hit={}, score={} => {}",
        symbol,
        supports.len(),
        rsi.current_rsi,
        fibonacci.fib_hit.as_ref().map_or("none", |h| h.level),
        score,
        final_signal
    );

    AnalysisResult {
        symbol: symbol.to_string(),
        supports,
        rsi,
        fibonacci,
        score,
        final_signal,
    }
}
