//! The hybrid ranker
//!
//! The weighted score lives in dollars-and-percentage-points and the
//! similarity score in inverse distance, so the two series are rescaled
//! independently to a common scale before blending. Ranked recommendations
//! use z-score rescaling; the full-table product for external tooling uses
//! min-max. Each consumer uses one strategy consistently.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use unirec_core::{minmax_series, zscore_series};

/// Blend weight of the rescaled weighted score.
pub const WEIGHTED_BLEND: f64 = 0.6;

/// Blend weight of the rescaled similarity score.
pub const SIMILARITY_BLEND: f64 = 0.4;

/// Rescaling strategy applied to each score series before blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Zero mean, unit variance.
    ZScore,
    /// Fixed [0, 1] range.
    MinMax,
}

/// Blended score for one prepared row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridScore {
    /// Row in the prepared dataset.
    pub row: usize,
    pub final_score: f64,
    /// Rescaled weighted component.
    pub weighted: f64,
    /// Rescaled similarity component.
    pub similarity: f64,
}

/// Rescale both series and blend them, aligned to the prepared row index.
pub fn blend(
    weighted: &[f64],
    similarity: &[f64],
    normalization: Normalization,
) -> Vec<HybridScore> {
    debug_assert_eq!(weighted.len(), similarity.len());

    let (scaled_weighted, scaled_similarity) = match normalization {
        Normalization::ZScore => (zscore_series(weighted), zscore_series(similarity)),
        Normalization::MinMax => (minmax_series(weighted), minmax_series(similarity)),
    };

    scaled_weighted
        .into_iter()
        .zip(scaled_similarity)
        .enumerate()
        .map(|(row, (w, s))| HybridScore {
            row,
            final_score: WEIGHTED_BLEND * w + SIMILARITY_BLEND * s,
            weighted: w,
            similarity: s,
        })
        .collect()
}

/// Select the `n` largest final scores, sorted descending.
///
/// Ties break by original row order, first seen wins.
pub fn top_n(scores: &[HybridScore], n: usize) -> Vec<HybridScore> {
    let mut sorted: Vec<HybridScore> = scores.to_vec();
    sorted.sort_by_key(|s| (Reverse(OrderedFloat(s.final_score)), s.row));
    sorted.truncate(n);
    sorted
}
