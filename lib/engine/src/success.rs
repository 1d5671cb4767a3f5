//! The student-success rubric
//!
//! A second, self-contained scoring rule: six sub-scores, each clamped to
//! [0, 1], combined with fixed weights into a single 0-1 score. Unlike the
//! hybrid path it needs no rescaling step, so it is handy as a comparable
//! score across requests. Computed over the prepared rows, where every
//! numeric input is already imputed.

use unirec_catalog::NumericFeature;
use unirec_data::{InstitutionTable, PreparedDataset};

/// Parameters of the success rubric.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessParams {
    /// State the student wants; `None` treats every state as a full fit.
    pub selected_state: Option<String>,
    /// Net-price cap anchoring the affordability sub-score.
    pub max_net_price: f64,
    /// Affordability-gap cap anchoring the affordability sub-score.
    pub max_affordability_gap: f64,
    /// Whether any MSI designation should count as a fit signal.
    pub msi_preference: bool,
    /// Work-hours cap anchoring the workload sub-score.
    pub max_work_hours: f64,
    /// Weigh childcare costs for student parents.
    pub student_parent: bool,
}

impl Default for SuccessParams {
    fn default() -> Self {
        Self {
            selected_state: None,
            max_net_price: 50000.0,
            max_affordability_gap: 50000.0,
            msi_preference: false,
            max_work_hours: 40.0,
            student_parent: false,
        }
    }
}

/// Compute the success score series, aligned to the prepared row index.
pub fn success_scores(
    table: &InstitutionTable,
    prepared: &PreparedDataset,
    params: &SuccessParams,
) -> Vec<f64> {
    let n = prepared.len();

    let net_price = prepared.numeric_column(NumericFeature::NetPrice);
    let gap = prepared.numeric_column(NumericFeature::AffordabilityGap);
    let retention = prepared.numeric_column(NumericFeature::RetentionRate);
    let grad6 = prepared.numeric_column(NumericFeature::GradRate6Year);
    let earnings = prepared.numeric_column(NumericFeature::MedianEarnings);
    let work_hours = prepared.numeric_column(NumericFeature::WeeklyHoursToCloseGap);
    let childcare = prepared.numeric_column(NumericFeature::AdjustedMonthlyCenterChildCare);

    let earnings_max = earnings.iter().copied().fold(0.0, f64::max).max(1.0);
    let childcare_max = childcare.iter().copied().fold(0.0, f64::max).max(1.0);

    let mut scores = Vec::with_capacity(n);
    for i in 0..n {
        let affordability = (0.5 * (1.0 - net_price[i] / params.max_net_price)
            + 0.5 * (1.0 - gap[i] / params.max_affordability_gap))
            .clamp(0.0, 1.0);

        let fit = match &params.selected_state {
            None => 1.0,
            Some(state) if state.is_empty() => 1.0,
            Some(state) => {
                if prepared.states()[i] == *state {
                    1.0
                } else {
                    0.3
                }
            }
        };

        let has_msi = table.records()[prepared.row_map()[i]]
            .msi_status
            .as_deref()
            .map(|s| s == "Yes")
            .unwrap_or(false)
            || prepared.flags()[i].iter().any(|&f| f);
        let msi = if params.msi_preference {
            if has_msi {
                1.0
            } else {
                0.0
            }
        } else {
            0.5
        };

        let outcomes = (0.4 * retention[i] / 100.0
            + 0.4 * grad6[i] / 100.0
            + 0.2 * earnings[i] / earnings_max)
            .clamp(0.0, 1.0);

        let workload = (1.0 - work_hours[i] / params.max_work_hours).clamp(0.0, 1.0);

        let parent_support = if params.student_parent {
            (1.0 - childcare[i] / childcare_max).clamp(0.0, 1.0)
        } else {
            0.5
        };

        let score = 0.30 * affordability
            + 0.10 * fit
            + 0.10 * msi
            + 0.30 * outcomes
            + 0.15 * workload
            + 0.05 * parent_support;
        scores.push(score.clamp(0.0, 1.0));
    }

    scores
}
