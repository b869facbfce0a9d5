//! Density-based clustering of candidate levels on price alone.
//!
//! Core points have at least `min_samples` candidates (themselves included)
//! within `eps` of their price. Core points closer than `eps` share a cluster;
//! non-core points join the cluster of their nearest core within `eps`, or are
//! dropped as noise. Dates are carried along but never used as a feature.

use crate::types::{CandidateLevel, LevelSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelClusterer {
    eps_pct: f64,
    min_samples: usize,
}

impl Default for LevelClusterer {
    fn default() -> Self {
        Self {
            eps_pct: 0.02,
            min_samples: 2,
        }
    }
}

impl LevelClusterer {
    pub fn new(eps_pct: f64, min_samples: usize) -> Self {
        Self {
            eps_pct,
            min_samples,
        }
    }

    /// Price radius used for the given candidates: `eps_pct` of their mean price.
    pub fn eps_for(&self, candidates: &[CandidateLevel]) -> f64 {
        if candidates.is_empty() {
            return 0.0;
        }
        let mean = candidates.iter().map(|c| c.price).sum::<f64>() / candidates.len() as f64;
        self.eps_pct * mean
    }

    /// Label each candidate with a cluster id, `None` for noise.
    ///
    /// Cluster ids increase with price.
    pub fn labels(&self, candidates: &[CandidateLevel]) -> Vec<Option<usize>> {
        let mut labels = vec![None; candidates.len()];
        if candidates.is_empty() {
            return labels;
        }

        let eps = self.eps_for(candidates);

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| candidates[a].price.total_cmp(&candidates[b].price));
        let prices: Vec<f64> = order.iter().map(|&i| candidates[i].price).collect();

        let is_core: Vec<bool> = prices
            .iter()
            .map(|&p| {
                let lo = prices.partition_point(|&x| x < p - eps);
                let hi = prices.partition_point(|&x| x <= p + eps);
                hi - lo >= self.min_samples
            })
            .collect();

        // Walk cores in price order; a gap wider than eps starts a new cluster.
        let mut core_prices: Vec<f64> = Vec::new();
        let mut core_labels: Vec<usize> = Vec::new();
        let mut next_label = 0;
        for (k, &p) in prices.iter().enumerate() {
            if !is_core[k] {
                continue;
            }
            let label = match (core_prices.last(), core_labels.last()) {
                (Some(&prev), Some(&prev_label)) if p - prev <= eps => prev_label,
                _ => {
                    next_label += 1;
                    next_label - 1
                }
            };
            core_prices.push(p);
            core_labels.push(label);
            labels[order[k]] = Some(label);
        }

        for (k, &p) in prices.iter().enumerate() {
            if is_core[k] {
                continue;
            }
            labels[order[k]] = nearest_core(&core_prices, p, eps).map(|c| core_labels[c]);
        }

        labels
    }

    /// Summarise each cluster as one candidate: mean price, earliest date, member count.
    pub fn cluster(&self, candidates: &[CandidateLevel]) -> Vec<CandidateLevel> {
        let labels = self.labels(candidates);
        let n_clusters = labels.iter().flatten().max().map_or(0, |m| m + 1);

        let mut members: Vec<Vec<&CandidateLevel>> = vec![Vec::new(); n_clusters];
        for (candidate, label) in candidates.iter().zip(&labels) {
            if let Some(label) = label {
                members[*label].push(candidate);
            }
        }

        members
            .into_iter()
            .filter(|group| !group.is_empty())
            .filter_map(|mut group| {
                group.sort_by(|a, b| a.price.total_cmp(&b.price));
                let price = group.iter().map(|c| c.price).sum::<f64>() / group.len() as f64;
                let date = group.iter().map(|c| c.date).min()?;
                Some(CandidateLevel {
                    date,
                    price,
                    source: LevelSource::Cluster,
                    touches: Some(group.len()),
                })
            })
            .collect()
    }
}

/// Index of the closest core price within `eps`, preferring the lower one on ties.
fn nearest_core(core_prices: &[f64], price: f64, eps: f64) -> Option<usize> {
    let idx = core_prices.partition_point(|&c| c < price);
    let below = idx.checked_sub(1).map(|i| (i, price - core_prices[i]));
    let above = core_prices.get(idx).map(|&c| (idx, c - price));

    let best = match (below, above) {
        (Some(b), Some(a)) => {
            if a.1 < b.1 {
                a
            } else {
                b
            }
        }
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => return None,
    };

    (best.1 <= eps).then_some(best.0)
}
