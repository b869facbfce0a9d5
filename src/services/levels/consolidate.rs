//! Deduplication and minimum/maximum spacing of candidate levels.

use crate::types::{CandidateLevel, LevelSource, SupportLevel};

/// Turns raw and clustered candidates into the final, zoned level list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConsolidator {
    /// Minimum relative gap (percent) between consecutive kept levels in the dedup pass.
    dedup_pct: f64,
    min_gap_pct: f64,
    max_gap_pct: f64,
    /// Half-width of each level's zone, in percent.
    zone_pct: f64,
}

impl Default for LevelConsolidator {
    fn default() -> Self {
        Self {
            dedup_pct: 1.0,
            min_gap_pct: 14.0,
            max_gap_pct: 17.0,
            zone_pct: 2.5,
        }
    }
}

impl LevelConsolidator {
    pub fn new(dedup_pct: f64, min_gap_pct: f64, max_gap_pct: f64, zone_pct: f64) -> Self {
        Self {
            dedup_pct,
            min_gap_pct,
            max_gap_pct,
            zone_pct,
        }
    }

    /// Walk candidates by ascending price, keeping one only if it sits more than
    /// `dedup_pct` above the last kept level. At equal prices a cluster summary
    /// goes first so its touch count survives.
    pub fn dedup(&self, candidates: &[CandidateLevel]) -> Vec<CandidateLevel> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| {
            a.price
                .total_cmp(&b.price)
                .then_with(|| cluster_first(a).cmp(&cluster_first(b)))
        });

        let mut kept: Vec<CandidateLevel> = Vec::with_capacity(sorted.len());
        for candidate in sorted {
            match kept.last() {
                Some(last) if gap_pct(candidate.price, last.price) <= self.dedup_pct => {}
                _ => kept.push(candidate),
            }
        }
        kept
    }

    /// Keep the highest level, then each lower level whose gap to the last kept
    /// one falls within `[min_gap_pct, max_gap_pct]`. Rejected levels do not
    /// move the anchor. Output is ordered by descending price.
    pub fn space(&self, levels: &[CandidateLevel]) -> Vec<CandidateLevel> {
        let mut sorted = levels.to_vec();
        sorted.sort_by(|a, b| b.price.total_cmp(&a.price));

        let mut kept: Vec<CandidateLevel> = Vec::new();
        for level in sorted {
            let accept = match kept.last() {
                None => true,
                Some(anchor) => {
                    let gap = gap_pct(level.price, anchor.price);
                    gap >= self.min_gap_pct && gap <= self.max_gap_pct
                }
            };
            if accept {
                kept.push(level);
            }
        }
        kept
    }

    /// Dedup, space, then attach zones.
    pub fn consolidate(&self, candidates: &[CandidateLevel]) -> Vec<SupportLevel> {
        let unique = self.dedup(candidates);
        self.space(&unique)
            .iter()
            .map(|level| SupportLevel::from_candidate(level, self.zone_pct))
            .collect()
    }
}

/// Percentage distance from `anchor` to `price`.
pub fn gap_pct(price: f64, anchor: f64) -> f64 {
    (price - anchor).abs() / anchor * 100.0
}

fn cluster_first(level: &CandidateLevel) -> u8 {
    match level.source {
        LevelSource::Cluster => 0,
        LevelSource::Pivot | LevelSource::Basin => 1,
    }
}
