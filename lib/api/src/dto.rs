//! Request and response payloads
//!
//! Field names are camelCase on the wire. Request fields all carry defaults:
//! a malformed or missing field recovers to its documented default instead
//! of failing the call.

use serde::{Deserialize, Serialize};
use tracing::warn;
use unirec_catalog::MsiCategory;
use unirec_engine::{Preferences, Recommendation};

/// A recommendation request as received from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendRequest {
    /// Maximum acceptable net price in dollars.
    pub max_net_price: f64,
    /// Minimum acceptable 6-year graduation rate, in percent.
    pub min_grad_rate: f64,
    /// Minimum acceptable retention rate, in percent.
    pub min_retention: f64,
    /// Preferred MSI category codes; unknown codes are dropped.
    pub msi_preferences: Vec<String>,
    /// Two-letter state code.
    pub preferred_state: Option<String>,
    /// Score graduation terms on the Pell-specific rate.
    pub focus_pell: bool,
    /// Number of institutions to return.
    pub top_n: usize,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            max_net_price: 25000.0,
            min_grad_rate: 40.0,
            min_retention: 70.0,
            msi_preferences: Vec::new(),
            preferred_state: None,
            focus_pell: false,
            top_n: 10,
        }
    }
}

impl RecommendRequest {
    /// Replace out-of-range fields with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.max_net_price.is_finite() || self.max_net_price < 0.0 {
            self.max_net_price = defaults.max_net_price;
        }
        if !self.min_grad_rate.is_finite() || self.min_grad_rate < 0.0 {
            self.min_grad_rate = defaults.min_grad_rate;
        }
        if !self.min_retention.is_finite() || self.min_retention < 0.0 {
            self.min_retention = defaults.min_retention;
        }
        if self.top_n == 0 {
            self.top_n = defaults.top_n;
        }
        if let Some(state) = &self.preferred_state {
            if state.is_empty() {
                self.preferred_state = None;
            }
        }
        self
    }

    /// Translate into engine preferences. Unknown MSI codes are dropped with
    /// a warning rather than failing the request.
    pub fn preferences(&self) -> Preferences {
        let msi_preferences: Vec<MsiCategory> = self
            .msi_preferences
            .iter()
            .filter_map(|code| match code.parse() {
                Ok(category) => Some(category),
                Err(err) => {
                    warn!(%err, "dropping unrecognized MSI preference");
                    None
                }
            })
            .collect();

        Preferences {
            max_net_price: Some(self.max_net_price),
            min_grad_rate: Some(self.min_grad_rate),
            min_retention: Some(self.min_retention),
            msi_preferences,
            preferred_state: self.preferred_state.clone(),
            focus_pell: self.focus_pell,
        }
    }
}

/// One recommended institution on the wire.
///
/// Missing numeric values are normalized to 0 before transmission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub unit_id: u32,
    pub institution_name: String,
    pub state_abbreviation: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub msi_status: Option<String>,
    pub net_price: f64,
    pub retention_rate: f64,
    pub grad_rate_6_year: f64,
    pub affordability_gap: f64,
    pub pell_award_percent: f64,
    pub pell_grad_rate_6_year: f64,
    pub hybrid_score: f64,
    pub weighted_score: f64,
    pub similarity_score: f64,
}

impl From<Recommendation> for RecommendationDto {
    fn from(r: Recommendation) -> Self {
        Self {
            unit_id: r.unit_id,
            institution_name: r.name,
            state_abbreviation: r.state,
            city: r.city,
            region: r.region,
            msi_status: r.msi_status,
            net_price: r.net_price.unwrap_or(0.0),
            retention_rate: r.retention_rate.unwrap_or(0.0),
            grad_rate_6_year: r.grad_rate_6yr.unwrap_or(0.0),
            affordability_gap: r.affordability_gap.unwrap_or(0.0),
            pell_award_percent: r.pell_award_percent.unwrap_or(0.0),
            pell_grad_rate_6_year: r.pell_grad_rate_6yr.unwrap_or(0.0),
            hybrid_score: r.hybrid_score,
            weighted_score: r.weighted_component,
            similarity_score: r.similarity_component,
        }
    }
}

/// The response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<RecommendationDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendResponse {
    pub fn ok(results: Vec<RecommendationDto>) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message.into()),
        }
    }
}

/// Static liveness signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "available".to_string(),
        }
    }
}
