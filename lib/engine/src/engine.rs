//! The engine context
//!
//! [`Recommender`] owns the loaded table and the prepared dataset. It is
//! built once at startup and never mutated; every request only reads from
//! it, so it can be shared across threads behind an `Arc` without locking.

use crate::error::Result;
use crate::preferences::{Preferences, ScoringWeights};
use crate::rank::{blend, top_n, HybridScore, Normalization};
use crate::scoring::compute_weighted_scores;
use crate::similarity::similarity_scores;
use crate::success::{success_scores, SuccessParams};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use unirec_data::{InstitutionTable, PreparedDataset};

/// One recommended institution, joined from the full original table.
///
/// Identity fields come from the raw record, not the imputed modeling
/// columns, so they can still be missing here; consumers decide how to
/// present gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub unit_id: u32,
    pub name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub msi_status: Option<String>,
    pub net_price: Option<f64>,
    pub retention_rate: Option<f64>,
    pub grad_rate_6yr: Option<f64>,
    pub affordability_gap: Option<f64>,
    pub pell_award_percent: Option<f64>,
    pub pell_grad_rate_6yr: Option<f64>,
    /// Blended hybrid score.
    pub hybrid_score: f64,
    /// Rescaled weighted component.
    pub weighted_component: f64,
    /// Rescaled similarity component.
    pub similarity_component: f64,
}

/// The hybrid recommendation engine.
#[derive(Debug, Clone)]
pub struct Recommender {
    table: InstitutionTable,
    prepared: PreparedDataset,
}

impl Recommender {
    /// Build the engine from an already-loaded table.
    ///
    /// Preparation failures are fatal: without a valid prepared dataset no
    /// request can be served.
    pub fn fit(table: InstitutionTable) -> Result<Self> {
        let prepared = PreparedDataset::prepare(&table)?;
        Ok(Self { table, prepared })
    }

    /// Load the merged source table from CSV and build the engine.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::fit(InstitutionTable::load_csv(path)?)
    }

    #[inline]
    pub fn table(&self) -> &InstitutionTable {
        &self.table
    }

    #[inline]
    pub fn prepared(&self) -> &PreparedDataset {
        &self.prepared
    }

    /// Top-N recommendations for a preference request, using z-score
    /// rescaling of both score streams.
    pub fn recommend(&self, prefs: &Preferences, top: usize) -> Result<Vec<Recommendation>> {
        self.recommend_with(prefs, top, Normalization::ZScore)
    }

    /// Top-N recommendations with an explicit rescaling strategy.
    pub fn recommend_with(
        &self,
        prefs: &Preferences,
        top: usize,
        normalization: Normalization,
    ) -> Result<Vec<Recommendation>> {
        let scores = self.hybrid_scores(prefs, normalization)?;
        let selected = top_n(&scores, top);

        debug!(
            candidates = scores.len(),
            returned = selected.len(),
            "ranked recommendation request"
        );

        Ok(selected
            .into_iter()
            .map(|score| self.join_row(score))
            .collect())
    }

    /// Hybrid scores for every prepared institution in row order, min-max
    /// rescaled to [0, 1] - the full-table product for external tooling.
    pub fn score_all(&self, prefs: &Preferences) -> Result<Vec<Recommendation>> {
        let scores = self.hybrid_scores(prefs, Normalization::MinMax)?;
        Ok(scores
            .into_iter()
            .map(|score| self.join_row(score))
            .collect())
    }

    /// Success-rubric scores for every prepared institution in row order.
    pub fn success_scores(&self, params: &SuccessParams) -> Vec<f64> {
        success_scores(&self.table, &self.prepared, params)
    }

    /// Distinct state codes observed in the source table, sorted ascending.
    pub fn states(&self) -> Vec<String> {
        self.table.states()
    }

    fn hybrid_scores(
        &self,
        prefs: &Preferences,
        normalization: Normalization,
    ) -> Result<Vec<HybridScore>> {
        let weights = ScoringWeights::from_preferences(prefs);
        let weighted = compute_weighted_scores(&self.prepared, &weights);
        let similarity = similarity_scores(&self.prepared, prefs)?;
        Ok(blend(&weighted, &similarity, normalization))
    }

    fn join_row(&self, score: HybridScore) -> Recommendation {
        let record = &self.table.records()[self.prepared.row_map()[score.row]];
        Recommendation {
            unit_id: record.unit_id,
            name: record.name.clone(),
            state: record.state.clone(),
            city: record.city.clone(),
            region: record.region.clone(),
            msi_status: record.msi_status.clone(),
            net_price: record.net_price,
            retention_rate: record.retention_rate,
            grad_rate_6yr: record.grad_rate_6yr,
            affordability_gap: record.affordability_gap,
            pell_award_percent: record.pell_award_percent,
            pell_grad_rate_6yr: record.pell_grad_rate_6yr,
            hybrid_score: score.final_score,
            weighted_component: score.weighted,
            similarity_component: score.similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unirec_catalog::MsiCategory;
    use unirec_data::InstitutionRecord;

    fn record(unit_id: u32, state: &str, net_price: f64, grad: f64) -> InstitutionRecord {
        InstitutionRecord {
            unit_id,
            name: format!("College {unit_id}"),
            city: Some("Testville".to_string()),
            state: Some(state.to_string()),
            region: Some("Far West".to_string()),
            size_category: Some("Medium".to_string()),
            sector: Some("Public".to_string()),
            highest_degree: Some("Doctor's degree".to_string()),
            msi_status: Some("No".to_string()),
            hsi: Some(0.0),
            pbi: Some(0.0),
            aanapii: Some(0.0),
            annhi: Some(0.0),
            hbcu: Some(0.0),
            tribal: Some(0.0),
            nanti: Some(0.0),
            net_price: Some(net_price),
            net_price_after_grants_2020: Some(15000.0),
            net_price_after_grants_2019: Some(15500.0),
            net_price_after_grants_2018: Some(16000.0),
            affordability_gap: Some(net_price - 6000.0),
            weekly_hours_to_close_gap: Some(20.0),
            state_minimum_wage: Some(12.0),
            ten_hour_week_wage_income: Some(6000.0),
            monthly_center_child_care: Some(900.0),
            adjusted_monthly_center_child_care: Some(850.0),
            annual_center_child_care: Some(10800.0),
            monthly_home_child_care: Some(700.0),
            adjusted_monthly_home_child_care: Some(650.0),
            annual_home_child_care: Some(8400.0),
            retention_rate: Some(80.0),
            grad_rate_6yr: Some(grad),
            grad_rate_4yr: Some(grad - 20.0),
            grad_rate_5yr: Some(grad - 5.0),
            pell_award_percent: Some(35.0),
            pell_grad_rate_6yr: Some(grad - 10.0),
            median_earnings: Some(45000.0),
            median_earnings_dependent: Some(47000.0),
            median_earnings_independent: Some(41000.0),
            instructional_expenses_per_fte: Some(11000.0),
            instructional_expenses_fasb_per_fte: Some(12000.0),
            endowment_assets_per_student: Some(30000.0),
        }
    }

    fn engine() -> Recommender {
        Recommender::fit(InstitutionTable::from_records(vec![
            record(1, "CA", 12000.0, 70.0),
            record(2, "TX", 18000.0, 55.0),
            record(3, "CA", 25000.0, 65.0),
            record(4, "NY", 32000.0, 80.0),
            record(5, "TX", 9000.0, 45.0),
        ]))
        .unwrap()
    }

    fn sample_prefs() -> Preferences {
        Preferences {
            max_net_price: Some(22000.0),
            min_grad_rate: Some(40.0),
            min_retention: Some(75.0),
            msi_preferences: vec![MsiCategory::Hsi],
            preferred_state: Some("CA".to_string()),
            focus_pell: false,
        }
    }

    #[test]
    fn test_recommend_returns_sorted_top_n() {
        let engine = engine();
        let results = engine.recommend(&sample_prefs(), 3).unwrap();

        assert_eq!(results.len(), 3);
        for pair in results.windows(2) {
            assert!(pair[0].hybrid_score >= pair[1].hybrid_score);
        }
    }

    #[test]
    fn test_recommend_caps_at_dataset_size() {
        let engine = engine();
        let results = engine.recommend(&sample_prefs(), 50).unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let engine = engine();
        let prefs = sample_prefs();
        let a = engine.recommend(&prefs, 5).unwrap();
        let b = engine.recommend(&prefs, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recommend_joins_original_records() {
        let engine = engine();
        let results = engine.recommend(&sample_prefs(), 5).unwrap();

        let top = &results[0];
        let record = engine
            .table()
            .records()
            .iter()
            .find(|r| r.unit_id == top.unit_id)
            .unwrap();
        assert_eq!(top.name, record.name);
        assert_eq!(top.net_price, record.net_price);
        assert_eq!(top.state, record.state);
    }

    #[test]
    fn test_blend_matches_components() {
        let engine = engine();
        for r in engine.recommend(&sample_prefs(), 5).unwrap() {
            let expected = crate::rank::WEIGHTED_BLEND * r.weighted_component
                + crate::rank::SIMILARITY_BLEND * r.similarity_component;
            assert!((r.hybrid_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_score_all_covers_every_prepared_row() {
        let engine = engine();
        let all = engine.score_all(&sample_prefs()).unwrap();

        assert_eq!(all.len(), engine.prepared().len());
        // Row order, not score order
        assert_eq!(all[0].unit_id, 1);
        assert_eq!(all[4].unit_id, 5);
        // Min-max components are bounded
        for r in &all {
            assert!(r.weighted_component >= 0.0 && r.weighted_component <= 1.0);
            assert!(r.similarity_component >= 0.0 && r.similarity_component <= 1.0);
        }
    }

    #[test]
    fn test_states_sorted_distinct() {
        let engine = engine();
        assert_eq!(engine.states(), vec!["CA", "NY", "TX"]);
    }

    #[test]
    fn test_success_scores_aligned() {
        let engine = engine();
        let scores = engine.success_scores(&SuccessParams::default());
        assert_eq!(scores.len(), engine.prepared().len());
        for score in scores {
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
