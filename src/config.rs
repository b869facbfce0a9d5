use std::env;
use std::str::FromStr;

use crate::services::levels::{
    BasinDetector, LevelClusterer, LevelConsolidator, LevelDetector, PivotDetector,
};
use crate::services::signals::{FibonacciRetracement, RsiSupport};

/// Parameters for every analysis stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisConfig {
    pub levels: LevelDetector,
    pub rsi: RsiSupport,
    pub fibonacci: FibonacciRetracement,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// History range fetched for analysis (e.g. "5y").
    pub analysis_range: String,
    /// History range served by the raw candles endpoint.
    pub history_range: String,
    /// How long a fetched daily series is reused, in seconds.
    pub candle_cache_ttl_secs: u64,
    /// Timeout for outbound market-data requests, in seconds.
    pub http_timeout_secs: u64,
    /// Analysis pipeline parameters.
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset or unparsable keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let analysis = AnalysisConfig {
            levels: LevelDetector {
                pivots: PivotDetector::new(parse_or(&lookup, "PIVOT_WINDOW", 4)),
                basins: BasinDetector::new(
                    parse_or(&lookup, "BASIN_WINDOW", 5),
                    parse_or(&lookup, "BASIN_STD_THRESHOLD", 0.015),
                ),
                clusterer: LevelClusterer::new(
                    parse_or(&lookup, "CLUSTER_EPS_PCT", 0.02),
                    parse_or(&lookup, "CLUSTER_MIN_SAMPLES", 2),
                ),
                consolidator: LevelConsolidator::new(
                    parse_or(&lookup, "LEVEL_DEDUP_PCT", 1.0),
                    parse_or(&lookup, "LEVEL_MIN_GAP_PCT", 14.0),
                    parse_or(&lookup, "LEVEL_MAX_GAP_PCT", 17.0),
                    parse_or(&lookup, "LEVEL_ZONE_PCT", 2.5),
                ),
            },
            rsi: RsiSupport::new(
                parse_or(&lookup, "RSI_PERIOD", 14),
                parse_or(&lookup, "RSI_SUPPORT_LOW", 38.0),
                parse_or(&lookup, "RSI_SUPPORT_HIGH", 42.0),
            ),
            fibonacci: FibonacciRetracement::new(
                parse_or(&lookup, "FIB_LOOKBACK", 200),
                parse_or(&lookup, "FIB_TOLERANCE_PCT", 2.0),
            ),
        };

        Self {
            host: get("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 8000),
            analysis_range: get("ANALYSIS_RANGE", "5y"),
            history_range: get("HISTORY_RANGE", "10y"),
            candle_cache_ttl_secs: parse_or(&lookup, "CANDLE_CACHE_TTL_SECS", 300),
            http_timeout_secs: parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30),
            analysis,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
