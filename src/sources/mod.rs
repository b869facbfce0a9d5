//! Market-data sources.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::types::Candle;

/// Anything that can supply a daily candle history for a symbol.
///
/// `range` is a lookback such as "5y" or "10y". Implementations return rows in
/// chronological order; an unknown symbol is an empty list, not an error.
pub trait CandleSource: Send + Sync {
    fn fetch_daily<'a>(
        &'a self,
        symbol: &'a str,
        range: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Candle>>>;
}
