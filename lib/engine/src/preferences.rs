//! Preference translation
//!
//! Maps a raw preference request into the typed weight structure the scorer
//! consumes. Translation is a pure function: no side effects, no dependency
//! on the dataset.

use serde::{Deserialize, Serialize};
use unirec_catalog::{MsiCategory, NumericFeature};

/// A per-call, immutable preference request.
///
/// Thresholds are `Option` because "absent" and "defaulted" behave
/// differently downstream: the scorer treats an absent threshold as no
/// limit, while the similarity query falls back to the dataset mean for the
/// corresponding feature slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Maximum acceptable net price in dollars.
    pub max_net_price: Option<f64>,
    /// Minimum acceptable 6-year graduation rate, in percent.
    pub min_grad_rate: Option<f64>,
    /// Minimum acceptable first-time/full-time retention rate, in percent.
    pub min_retention: Option<f64>,
    /// MSI designations the student wants; each match earns its own bonus.
    pub msi_preferences: Vec<MsiCategory>,
    /// Two-letter state code, if the student prefers a state.
    pub preferred_state: Option<String>,
    /// Score graduation terms on the Pell-specific 6-year rate instead of
    /// the overall one.
    pub focus_pell: bool,
}

/// The translated weight structure: fixed feature coefficients plus the
/// user's thresholds and categorical preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub net_price: f64,
    pub grad_rate: f64,
    pub pell_grad_rate: f64,
    pub retention: f64,
    pub affordability_gap: f64,
    pub max_net_price: f64,
    pub min_grad_rate: f64,
    pub min_retention: f64,
    pub msi_preferences: Vec<MsiCategory>,
    pub preferred_state: Option<String>,
    pub focus_pell: bool,
}

impl ScoringWeights {
    /// Translate a preference request. Coefficients are fixed: lower net
    /// price and affordability gap are better, higher outcomes are better.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            net_price: -1.0,
            grad_rate: 1.0,
            pell_grad_rate: 1.0,
            retention: 1.0,
            affordability_gap: -0.3,
            max_net_price: prefs.max_net_price.unwrap_or(f64::INFINITY),
            min_grad_rate: prefs.min_grad_rate.unwrap_or(0.0),
            min_retention: prefs.min_retention.unwrap_or(0.0),
            msi_preferences: prefs.msi_preferences.clone(),
            preferred_state: prefs.preferred_state.clone(),
            focus_pell: prefs.focus_pell,
        }
    }

    /// The graduation-rate feature every graduation term scores on.
    pub fn grad_feature(&self) -> NumericFeature {
        if self.focus_pell {
            NumericFeature::PellGradRate6Year
        } else {
            NumericFeature::GradRate6Year
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_coefficients() {
        let weights = ScoringWeights::from_preferences(&Preferences::default());
        assert_eq!(weights.net_price, -1.0);
        assert_eq!(weights.grad_rate, 1.0);
        assert_eq!(weights.pell_grad_rate, 1.0);
        assert_eq!(weights.retention, 1.0);
        assert_eq!(weights.affordability_gap, -0.3);
    }

    #[test]
    fn test_absent_thresholds_resolve_to_no_limit() {
        let weights = ScoringWeights::from_preferences(&Preferences::default());
        assert!(weights.max_net_price.is_infinite());
        assert_eq!(weights.min_grad_rate, 0.0);
        assert_eq!(weights.min_retention, 0.0);
    }

    #[test]
    fn test_thresholds_carried_through() {
        let prefs = Preferences {
            max_net_price: Some(22000.0),
            min_grad_rate: Some(40.0),
            min_retention: Some(75.0),
            msi_preferences: vec![MsiCategory::Hsi, MsiCategory::Hbcu],
            preferred_state: Some("CA".to_string()),
            focus_pell: true,
        };
        let weights = ScoringWeights::from_preferences(&prefs);
        assert_eq!(weights.max_net_price, 22000.0);
        assert_eq!(weights.min_grad_rate, 40.0);
        assert_eq!(weights.min_retention, 75.0);
        assert_eq!(weights.msi_preferences, prefs.msi_preferences);
        assert_eq!(weights.preferred_state.as_deref(), Some("CA"));
        assert!(weights.focus_pell);
    }

    #[test]
    fn test_grad_feature_follows_pell_focus() {
        let mut prefs = Preferences::default();
        let weights = ScoringWeights::from_preferences(&prefs);
        assert_eq!(weights.grad_feature(), NumericFeature::GradRate6Year);

        prefs.focus_pell = true;
        let weights = ScoringWeights::from_preferences(&prefs);
        assert_eq!(weights.grad_feature(), NumericFeature::PellGradRate6Year);
    }

    #[test]
    fn test_translation_is_pure() {
        let prefs = Preferences {
            max_net_price: Some(18000.0),
            ..Default::default()
        };
        assert_eq!(
            ScoringWeights::from_preferences(&prefs),
            ScoringWeights::from_preferences(&prefs)
        );
    }
}
