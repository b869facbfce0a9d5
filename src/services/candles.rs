//! Cached, validated access to daily candle series.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::Result;
use crate::services::Cache;
use crate::sources::CandleSource;
use crate::types::CandleSeries;

/// Fetches daily history through a [`CandleSource`], validates it and caches it
/// per symbol and range.
pub struct CandleService {
    source: Arc<dyn CandleSource>,
    cache: Cache<Arc<CandleSeries>>,
}

impl CandleService {
    pub fn new(source: Arc<dyn CandleSource>, ttl: Duration) -> Arc<Self> {
        Arc::new(Self {
            source,
            cache: Cache::new(ttl),
        })
    }

    /// Validated daily series for `symbol` over `range`.
    ///
    /// Fails only when the upstream fetch fails or the rows break the series
    /// contract; an empty history is returned as an empty series.
    pub async fn daily_series(&self, symbol: &str, range: &str) -> Result<Arc<CandleSeries>> {
        let key = format!("{}:{}", symbol.trim(), range);
        if let Some(series) = self.cache.get(&key) {
            debug!("Candle cache hit for {} ({})", symbol, range);
            return Ok(series);
        }

        let candles = self.source.fetch_daily(symbol, range).await.map_err(|e| {
            warn!("Failed to fetch candles for {}: {}", symbol, e);
            e
        })?;

        let series = Arc::new(CandleSeries::new(candles)?);
        debug!("Fetched {} daily candles for {} ({})", series.len(), symbol, range);

        if !series.is_empty() {
            self.cache.insert(&key, series.clone());
        }
        Ok(series)
    }

    /// Drop expired cache entries.
    pub fn purge_expired(&self) {
        self.cache.purge_expired();
    }
}
