use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One OHLC bar keyed by trading date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    fn validate(&self) -> Result<()> {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(AppError::InvalidSeries(format!(
                "non-positive or non-finite price on {}",
                self.date
            )));
        }
        if self.high < self.low {
            return Err(AppError::InvalidSeries(format!(
                "high {} below low {} on {}",
                self.high, self.low, self.date
            )));
        }
        Ok(())
    }
}

/// Chronologically ordered candles with unique dates.
///
/// The only way to build one is through [`CandleSeries::new`], which rejects
/// duplicate or out-of-order dates and malformed prices. An empty series is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new(candles: Vec<Candle>) -> Result<Self> {
        for candle in &candles {
            candle.validate()?;
        }
        if let Some(pair) = candles.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(AppError::InvalidSeries(format!(
                "date {} does not follow {}",
                pair[1].date, pair[0].date
            )));
        }
        Ok(Self { candles })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }
}
