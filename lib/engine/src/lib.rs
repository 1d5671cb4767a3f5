//! # unirec Engine
//!
//! The hybrid recommendation engine.
//!
//! Two score streams are computed per request against the prepared dataset
//! and blended into one ranking:
//!
//! - **Weighted score**: a linear combination of raw features with fixed
//!   coefficients, threshold bonuses/penalties, and categorical-preference
//!   bonuses ([`scoring`])
//! - **Similarity score**: inverse Euclidean distance from a preference-built
//!   query vector to every encoded institution ([`similarity`])
//!
//! The [`rank`] module rescales both streams to a common scale and blends
//! them 0.6/0.4. [`Recommender`] is the engine context: built once at
//! startup, immutable, shared read-only across requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use unirec_engine::{Preferences, Recommender};
//! use unirec_catalog::MsiCategory;
//!
//! let engine = Recommender::open("processed_data/merged_dataset.csv").unwrap();
//!
//! let prefs = Preferences {
//!     max_net_price: Some(22000.0),
//!     min_grad_rate: Some(40.0),
//!     min_retention: Some(75.0),
//!     msi_preferences: vec![MsiCategory::Hsi, MsiCategory::Hbcu],
//!     preferred_state: Some("CA".to_string()),
//!     focus_pell: false,
//! };
//! let top = engine.recommend(&prefs, 10).unwrap();
//! for r in &top {
//!     println!("{} ({}): {:.3}", r.name, r.unit_id, r.hybrid_score);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod preferences;
pub mod rank;
pub mod scoring;
pub mod similarity;
pub mod success;

pub use engine::{Recommendation, Recommender};
pub use error::{EngineError, Result};
pub use preferences::{Preferences, ScoringWeights};
pub use rank::{HybridScore, Normalization, SIMILARITY_BLEND, WEIGHTED_BLEND};
pub use scoring::{
    compute_weighted_scores, MSI_PREFERENCE_BONUS, STATE_PREFERENCE_BONUS, THRESHOLD_BONUS_WEIGHT,
};
pub use similarity::{build_query_vector, similarity_scores};
pub use success::{success_scores, SuccessParams};
