//! The weighted scorer
//!
//! Computes a raw, unstandardized score per institution from the imputed
//! (never missing) prepared columns. Larger is always better. The bonus
//! constants live on the same dollar scale as net price so categorical
//! preferences can compete with cost differences.

use crate::preferences::ScoringWeights;
use unirec_catalog::NumericFeature;
use unirec_data::PreparedDataset;

/// Bonus for each preferred MSI category an institution satisfies.
pub const MSI_PREFERENCE_BONUS: f64 = 5000.0;

/// Bonus for matching the preferred state.
pub const STATE_PREFERENCE_BONUS: f64 = 15000.0;

/// Multiplier on the one-sided over-threshold outcome bonuses.
pub const THRESHOLD_BONUS_WEIGHT: f64 = 10.0;

/// Compute the weighted score series, aligned to the prepared row index.
///
/// Terms per institution:
/// - base: weighted net price, retention, and graduation rate (Pell-specific
///   when the Pell focus is set)
/// - affordability: weighted affordability gap
/// - one-sided penalty for exceeding the max net price (dollar for dollar)
/// - one-sided bonuses for clearing the graduation and retention thresholds
/// - flat bonuses per matched MSI preference and for the preferred state
pub fn compute_weighted_scores(prepared: &PreparedDataset, weights: &ScoringWeights) -> Vec<f64> {
    let n = prepared.len();

    let net_price = prepared.numeric_column(NumericFeature::NetPrice);
    let retention = prepared.numeric_column(NumericFeature::RetentionRate);
    let grad = prepared.numeric_column(weights.grad_feature());
    let gap = prepared.numeric_column(NumericFeature::AffordabilityGap);

    let grad_weight = if weights.focus_pell {
        weights.pell_grad_rate
    } else {
        weights.grad_rate
    };

    let mut scores = Vec::with_capacity(n);
    for i in 0..n {
        let mut score = weights.net_price * net_price[i]
            + weights.retention * retention[i]
            + grad_weight * grad[i]
            + weights.affordability_gap * gap[i];

        // Over-budget penalty is one-sided: being under budget earns nothing
        // beyond the base term.
        if net_price[i] > weights.max_net_price {
            score -= net_price[i] - weights.max_net_price;
        }

        score += THRESHOLD_BONUS_WEIGHT * (grad[i] - weights.min_grad_rate).max(0.0);
        score += THRESHOLD_BONUS_WEIGHT * (retention[i] - weights.min_retention).max(0.0);

        // Additive across multiple simultaneous MSI preferences
        let flags = &prepared.flags()[i];
        for category in &weights.msi_preferences {
            if flags[category.index()] {
                score += MSI_PREFERENCE_BONUS;
            }
        }

        if let Some(state) = &weights.preferred_state {
            if prepared.states()[i] == *state {
                score += STATE_PREFERENCE_BONUS;
            }
        }

        scores.push(score);
    }

    scores
}
