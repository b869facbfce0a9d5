//! Support/resistance level detection.
//!
//! Daily candles are resampled to weekly bars, pivots and basins are pulled
//! out as candidate touches, the touches are clustered by price, and the raw
//! candidates plus cluster summaries are consolidated into a spaced level list.

pub mod basins;
pub mod cluster;
pub mod consolidate;
pub mod pivots;
pub mod weekly;

pub use basins::BasinDetector;
pub use cluster::LevelClusterer;
pub use consolidate::LevelConsolidator;
pub use pivots::PivotDetector;
pub use weekly::resample_weekly;

use tracing::debug;

use crate::types::{CandidateLevel, Candle, SupportLevel};

/// The full level pipeline with its stage parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LevelDetector {
    pub pivots: PivotDetector,
    pub basins: BasinDetector,
    pub clusterer: LevelClusterer,
    pub consolidator: LevelConsolidator,
}

impl LevelDetector {
    /// Pivot highs, pivot lows and basins from weekly bars, flattened.
    pub fn candidates(&self, weekly: &[Candle]) -> Vec<CandidateLevel> {
        let (highs, lows) = self.pivots.detect(weekly);
        let basins = self.basins.detect(weekly);
        debug!(
            "Found {} pivot highs, {} pivot lows, {} basins",
            highs.len(),
            lows.len(),
            basins.len()
        );

        highs
            .into_iter()
            .chain(lows)
            .map(CandidateLevel::from)
            .chain(basins.into_iter().map(CandidateLevel::from))
            .collect()
    }

    /// Run the whole pipeline over daily candles. Empty or short input yields no levels.
    pub fn detect(&self, daily: &[Candle]) -> Vec<SupportLevel> {
        let weekly = resample_weekly(daily);
        if weekly.is_empty() {
            return Vec::new();
        }

        let mut candidates = self.candidates(&weekly);
        let clusters = self.clusterer.cluster(&candidates);
        debug!(
            "Clustered {} candidates into {} levels",
            candidates.len(),
            clusters.len()
        );

        candidates.extend(clusters);
        let levels = self.consolidator.consolidate(&candidates);
        debug!(
            "Kept {} of {} candidate levels after spacing",
            levels.len(),
            candidates.len()
        );
        levels
    }
}
