use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::require_symbol;
use crate::error::Result;
use crate::types::CandlesResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CandlesQuery {
    pub symbol: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/candles", get(get_candles))
}

/// Daily OHLC history for a symbol over the configured history range,
/// e.g. `/api/candles?symbol=RELIANCE.NS`.
async fn get_candles(
    State(state): State<AppState>,
    Query(query): Query<CandlesQuery>,
) -> Result<Json<CandlesResponse>> {
    let symbol = require_symbol(query.symbol.as_deref())?;
    let series = state
        .candle_service
        .daily_series(&symbol, &state.config.history_range)
        .await?;
    Ok(Json(CandlesResponse::new(&symbol, &series)))
}
