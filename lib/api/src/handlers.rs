//! Boundary handlers
//!
//! The only place engine errors are allowed to surface: each handler turns a
//! failure into a structured envelope so the caller always gets a response.

use crate::dto::{HealthResponse, RecommendRequest, RecommendResponse};
use tracing::{debug, error};
use unirec_engine::Recommender;

/// Answer a recommendation request.
///
/// Request fields are sanitized first; a computation failure comes back as
/// `{success: false, error}` instead of propagating.
pub fn recommend(engine: &Recommender, request: RecommendRequest) -> RecommendResponse {
    let request = request.sanitized();
    let prefs = request.preferences();

    debug!(top_n = request.top_n, "handling recommendation request");

    match engine.recommend(&prefs, request.top_n) {
        Ok(results) => {
            RecommendResponse::ok(results.into_iter().map(Into::into).collect())
        }
        Err(err) => {
            error!(%err, "recommendation request failed");
            RecommendResponse::failure(err.to_string())
        }
    }
}

/// Distinct sorted state codes observed in the source dataset.
pub fn states(engine: &Recommender) -> Vec<String> {
    engine.states()
}

/// Static liveness signal.
pub fn health() -> HealthResponse {
    HealthResponse::default()
}
