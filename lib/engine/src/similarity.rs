//! Similarity scoring
//!
//! Builds a query vector in the encoded space from the preference request
//! and scores every institution by inverse Euclidean distance. The scan is
//! dense: every row gets a score, not just the nearest neighbors.

use crate::error::Result;
use crate::preferences::Preferences;
use unirec_catalog::{CategoricalFeature, NumericFeature};
use unirec_core::Vector;
use unirec_data::{EncodedLayout, PreparedDataset};

/// Build the query vector for a preference request.
///
/// Threshold values stand in for the dataset features they constrain: max
/// net price fills the net-price and affordability-gap slots, min graduation
/// rate fills both graduation-rate slots, min retention fills the retention
/// slot. Every unfilled numeric slot falls back to the feature's dataset
/// mean, which standardizes to zero. Preferred MSI flags and the preferred
/// state's one-hot slot are set to 1; everything else stays 0.
pub fn build_query_vector(prepared: &PreparedDataset, prefs: &Preferences) -> Vector {
    let layout = prepared.layout();
    let scaler = prepared.scaler();
    let mut slots = vec![0.0; layout.dim()];

    let mut raw: Vec<f64> = NumericFeature::ALL
        .iter()
        .map(|&f| prepared.numeric_mean(f))
        .collect();
    if let Some(price) = prefs.max_net_price {
        raw[NumericFeature::NetPrice.index()] = price;
        raw[NumericFeature::AffordabilityGap.index()] = price;
    }
    if let Some(grad) = prefs.min_grad_rate {
        raw[NumericFeature::GradRate6Year.index()] = grad;
        raw[NumericFeature::PellGradRate6Year.index()] = grad;
    }
    if let Some(retention) = prefs.min_retention {
        raw[NumericFeature::RetentionRate.index()] = retention;
    }

    for feature in NumericFeature::ALL {
        let j = feature.index();
        slots[EncodedLayout::numeric_slot(feature)] = scaler.transform_value(j, raw[j]);
    }

    for category in &prefs.msi_preferences {
        slots[EncodedLayout::msi_slot(*category)] = 1.0;
    }

    if let Some(state) = &prefs.preferred_state {
        // Reference and unobserved levels have no slot and stay 0
        if let Some(slot) = layout.level_slot(CategoricalFeature::StateAbbreviation, state) {
            slots[slot] = 1.0;
        }
    }

    Vector::new(slots)
}

/// Dense similarity series, aligned to the prepared row index.
///
/// Similarity is `1 / (1 + distance)`: strictly positive, 1.0 exactly at
/// zero distance, monotone decreasing in distance, never zero.
pub fn similarity_scores(prepared: &PreparedDataset, prefs: &Preferences) -> Result<Vec<f64>> {
    let query = build_query_vector(prepared, prefs);
    let distances = prepared.index().distances(&query)?;
    Ok(distances.into_iter().map(|d| 1.0 / (1.0 + d)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unirec_catalog::MsiCategory;
    use unirec_data::{InstitutionRecord, InstitutionTable};

    fn record(unit_id: u32, state: &str, net_price: f64) -> InstitutionRecord {
        InstitutionRecord {
            unit_id,
            name: format!("College {unit_id}"),
            city: Some("Testville".to_string()),
            state: Some(state.to_string()),
            region: Some("Far West".to_string()),
            size_category: Some("Medium".to_string()),
            sector: Some("Public".to_string()),
            highest_degree: Some("Doctor's degree".to_string()),
            hsi: Some(0.0),
            pbi: Some(0.0),
            aanapii: Some(0.0),
            annhi: Some(0.0),
            hbcu: Some(0.0),
            tribal: Some(0.0),
            nanti: Some(0.0),
            net_price: Some(net_price),
            // Constant across rows so only net price, the gap, and the state
            // separate institutions in the encoded space
            net_price_after_grants_2020: Some(15000.0),
            net_price_after_grants_2019: Some(15500.0),
            net_price_after_grants_2018: Some(16000.0),
            affordability_gap: Some(net_price - 6000.0),
            weekly_hours_to_close_gap: Some(25.0),
            state_minimum_wage: Some(12.0),
            ten_hour_week_wage_income: Some(6000.0),
            monthly_center_child_care: Some(900.0),
            adjusted_monthly_center_child_care: Some(850.0),
            annual_center_child_care: Some(10800.0),
            monthly_home_child_care: Some(700.0),
            adjusted_monthly_home_child_care: Some(650.0),
            annual_home_child_care: Some(8400.0),
            retention_rate: Some(80.0),
            grad_rate_6yr: Some(60.0),
            grad_rate_4yr: Some(40.0),
            grad_rate_5yr: Some(55.0),
            pell_award_percent: Some(35.0),
            pell_grad_rate_6yr: Some(50.0),
            median_earnings: Some(45000.0),
            median_earnings_dependent: Some(47000.0),
            median_earnings_independent: Some(41000.0),
            instructional_expenses_per_fte: Some(11000.0),
            instructional_expenses_fasb_per_fte: Some(12000.0),
            endowment_assets_per_student: Some(30000.0),
            msi_status: Some("No".to_string()),
        }
    }

    fn prepare(records: Vec<InstitutionRecord>) -> PreparedDataset {
        PreparedDataset::prepare(&InstitutionTable::from_records(records)).unwrap()
    }

    #[test]
    fn test_query_defaults_to_means() {
        let prepared = prepare(vec![
            record(1, "CA", 10000.0),
            record(2, "TX", 20000.0),
            record(3, "CA", 30000.0),
        ]);

        let query = build_query_vector(&prepared, &Preferences::default());
        // Mean-filled numeric slots standardize to zero, and no binary or
        // one-hot slot is set
        assert!(query.as_slice().iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_thresholds_fill_their_slots() {
        let prepared = prepare(vec![
            record(1, "CA", 10000.0),
            record(2, "TX", 20000.0),
            record(3, "CA", 30000.0),
        ]);

        let prefs = Preferences {
            max_net_price: Some(10000.0),
            ..Default::default()
        };
        let query = build_query_vector(&prepared, &prefs);

        let price_slot = EncodedLayout::numeric_slot(NumericFeature::NetPrice);
        let gap_slot = EncodedLayout::numeric_slot(NumericFeature::AffordabilityGap);
        // 10000 is below the 20000 mean, so both seeded slots go negative
        assert!(query.as_slice()[price_slot] < 0.0);
        assert!(query.as_slice()[gap_slot] < 0.0);

        // Untouched numeric slots stay at the (standardized) mean
        let retention_slot = EncodedLayout::numeric_slot(NumericFeature::RetentionRate);
        assert!(query.as_slice()[retention_slot].abs() < 1e-12);
    }

    #[test]
    fn test_msi_and_state_slots_set() {
        let prepared = prepare(vec![
            record(1, "CA", 10000.0),
            record(2, "TX", 20000.0),
        ]);

        let prefs = Preferences {
            msi_preferences: vec![MsiCategory::Hsi],
            preferred_state: Some("TX".to_string()),
            ..Default::default()
        };
        let query = build_query_vector(&prepared, &prefs);

        assert_eq!(query.as_slice()[EncodedLayout::msi_slot(MsiCategory::Hsi)], 1.0);
        assert_eq!(query.as_slice()[EncodedLayout::msi_slot(MsiCategory::Hbcu)], 0.0);

        let tx_slot = prepared
            .layout()
            .level_slot(CategoricalFeature::StateAbbreviation, "TX")
            .unwrap();
        assert_eq!(query.as_slice()[tx_slot], 1.0);
    }

    #[test]
    fn test_unobserved_state_leaves_vector_unchanged() {
        let prepared = prepare(vec![
            record(1, "CA", 10000.0),
            record(2, "TX", 20000.0),
        ]);

        let prefs = Preferences {
            preferred_state: Some("ZZ".to_string()),
            ..Default::default()
        };
        let query = build_query_vector(&prepared, &prefs);
        assert_eq!(query, build_query_vector(&prepared, &Preferences::default()));
    }

    #[test]
    fn test_similarity_bounds() {
        let prepared = prepare(vec![
            record(1, "CA", 8000.0),
            record(2, "TX", 20000.0),
            record(3, "CA", 45000.0),
        ]);

        let prefs = Preferences {
            max_net_price: Some(9000.0),
            min_retention: Some(85.0),
            ..Default::default()
        };
        let scores = similarity_scores(&prepared, &prefs).unwrap();

        assert_eq!(scores.len(), 3);
        for s in &scores {
            assert!(*s > 0.0 && *s <= 1.0);
        }
    }

    #[test]
    fn test_similarity_decreases_with_distance() {
        let prepared = prepare(vec![
            record(1, "CA", 10000.0),
            record(2, "TX", 20000.0),
            record(3, "CA", 40000.0),
        ]);

        // Query at the cheap end of the range
        let prefs = Preferences {
            max_net_price: Some(10000.0),
            ..Default::default()
        };
        let scores = similarity_scores(&prepared, &prefs).unwrap();
        assert!(scores[0] > scores[1]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn test_similarity_is_one_at_zero_distance() {
        // One row: its encoded vector is all zeros (every column standardizes
        // to zero), matching the default query exactly
        let prepared = prepare(vec![record(1, "CA", 10000.0)]);
        let scores = similarity_scores(&prepared, &Preferences::default()).unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-12);
    }
}
