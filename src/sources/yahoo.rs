//! Yahoo Finance chart API client for daily candles.
//!
//! Uses the unofficial chart endpoint, which needs no API key.

use chrono::{DateTime, NaiveDate};
use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::CandleSource;
use crate::error::{AppError, Result};
use crate::types::Candle;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    meta: YahooMeta,
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooMeta {
    symbol: String,
    /// Exchange offset from UTC in seconds.
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

/// Normalize a symbol for the chart API. Exchange suffixes like `.NS` are kept.
fn normalize_yahoo_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Exchange-local trading date for a bar timestamp.
fn trading_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp + gmtoffset, 0).map(|dt| dt.date_naive())
}

fn field(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

/// Turn one chart result into daily candles.
///
/// Rows missing any of open/high/low/close are dropped. When the same date
/// appears twice (Yahoo repeats the live bar), the later row wins.
fn candles_from_result(result: YahooResult) -> Vec<Candle> {
    let Some(timestamps) = result.timestamp else {
        return Vec::new();
    };
    let offset = result.meta.gmtoffset.unwrap_or(0);
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let opens = quote.open.unwrap_or_default();
    let highs = quote.high.unwrap_or_default();
    let lows = quote.low.unwrap_or_default();
    let closes = quote.close.unwrap_or_default();
    let volumes = quote.volume.unwrap_or_default();

    let mut candles: Vec<Candle> = Vec::with_capacity(timestamps.len());
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close), Some(date)) = (
            field(&opens, i),
            field(&highs, i),
            field(&lows, i),
            field(&closes, i),
            trading_date(timestamp, offset),
        ) else {
            continue;
        };

        let candle = Candle {
            date,
            open,
            high,
            low,
            close,
            volume: field(&volumes, i),
        };

        match candles.last_mut() {
            Some(last) if last.date == date => *last = candle,
            _ => candles.push(candle),
        }
    }

    candles
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
}

impl YahooFinanceClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self { client })
    }

    /// Fetch `range` of daily candles for a symbol. An unknown or empty symbol
    /// yields an empty list.
    pub async fn get_daily_history(&self, symbol: &str, range: &str) -> Result<Vec<Candle>> {
        let yahoo_symbol = normalize_yahoo_symbol(symbol);
        let url = format!(
            "{}/{}?range={}&interval=1d&includePrePost=false",
            CHART_URL, yahoo_symbol, range
        );

        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            warn!("Yahoo has no chart for {}", yahoo_symbol);
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Yahoo API error: {}",
                response.status()
            )));
        }

        let data: YahooChartResponse = response.json().await?;
        parse_chart(data)
    }
}

fn parse_chart(data: YahooChartResponse) -> Result<Vec<Candle>> {
    if let Some(error) = data.chart.error {
        if error.code == "Not Found" {
            return Ok(Vec::new());
        }
        return Err(AppError::ExternalApi(format!(
            "Yahoo API error: {} - {}",
            error.code, error.description
        )));
    }

    let Some(result) = data.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };

    debug!("Parsing chart for {}", result.meta.symbol);
    Ok(candles_from_result(result))
}

impl CandleSource for YahooFinanceClient {
    fn fetch_daily<'a>(
        &'a self,
        symbol: &'a str,
        range: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Candle>>> {
        Box::pin(self.get_daily_history(symbol, range))
    }
}
