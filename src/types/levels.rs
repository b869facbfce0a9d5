use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which extreme a pivot marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotKind {
    High,
    Low,
}

/// A weekly bar whose high (or low) is the extreme of its look-around window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub kind: PivotKind,
}

/// Start of a flat run of weekly closes, priced at the run's mean close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasinPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Where a candidate level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSource {
    Pivot,
    Basin,
    Cluster,
}

/// A price touch fed into clustering and consolidation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateLevel {
    pub date: NaiveDate,
    pub price: f64,
    pub source: LevelSource,
    /// Member count, set only for cluster summaries.
    pub touches: Option<usize>,
}

impl From<PivotPoint> for CandidateLevel {
    fn from(pivot: PivotPoint) -> Self {
        Self {
            date: pivot.date,
            price: pivot.price,
            source: LevelSource::Pivot,
            touches: None,
        }
    }
}

impl From<BasinPoint> for CandidateLevel {
    fn from(basin: BasinPoint) -> Self {
        Self {
            date: basin.date,
            price: basin.price,
            source: LevelSource::Basin,
            touches: None,
        }
    }
}

/// Final support/resistance level with its zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportLevel {
    pub date: NaiveDate,
    pub price: f64,
    pub zone_low: f64,
    pub zone_high: f64,
    pub source: LevelSource,
    pub touches: Option<usize>,
}

impl SupportLevel {
    /// Build a level with a symmetric `zone_pct` percent band around its price.
    pub fn from_candidate(candidate: &CandidateLevel, zone_pct: f64) -> Self {
        let half = zone_pct / 100.0;
        Self {
            date: candidate.date,
            price: candidate.price,
            zone_low: candidate.price * (1.0 - half),
            zone_high: candidate.price * (1.0 + half),
            source: candidate.source,
            touches: candidate.touches,
        }
    }
}
