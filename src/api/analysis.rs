//! Analysis endpoint.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::require_symbol;
use crate::error::Result;
use crate::services::analyze;
use crate::types::AnalysisResponse;
use crate::AppState;

/// Query parameters for `/api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub symbol: Option<String>,
    /// Append the daily candles used for the analysis.
    #[serde(default)]
    pub include_df: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", get(get_analysis))
}

/// Levels, RSI support, Fibonacci hit and the BUY/WAIT verdict for a symbol.
async fn get_analysis(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<AnalysisResponse>> {
    let symbol = require_symbol(query.symbol.as_deref())?;
    let series = state
        .candle_service
        .daily_series(&symbol, &state.config.analysis_range)
        .await?;

    let result = analyze(&symbol, &series, &state.config.analysis);
    let candles = query.include_df.then_some(series.as_ref());

    Ok(Json(AnalysisResponse::new(&result, candles)))
}
