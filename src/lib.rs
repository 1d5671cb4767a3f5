//! # unirec
//!
//! A hybrid college recommendation engine.
//!
//! unirec ranks accredited institutions for a prospective student by
//! blending two score streams computed against a prepared institutional
//! dataset:
//!
//! - a **weighted preference score**: fixed linear coefficients over raw
//!   cost and outcome features, one-sided threshold bonuses/penalties, and
//!   flat bonuses for preferred MSI categories and state
//! - a **similarity score**: inverse Euclidean distance from a query vector
//!   built out of the student's thresholds to every institution in a
//!   standardized, one-hot-encoded feature space
//!
//! Both streams are rescaled to a common scale and blended 0.6/0.4; the
//! top-N institutions come back joined from the original table.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install unirec
//! unirec --data merged_dataset.csv --state CA --msi HSI --max-net-price 22000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use unirec::prelude::*;
//!
//! // One-time startup: load and prepare the dataset
//! let engine = Recommender::open("processed_data/merged_dataset.csv").unwrap();
//!
//! // Per request: immutable preferences in, ranked records out
//! let prefs = Preferences {
//!     max_net_price: Some(22000.0),
//!     min_grad_rate: Some(40.0),
//!     min_retention: Some(75.0),
//!     msi_preferences: vec![MsiCategory::Hsi, MsiCategory::Hbcu],
//!     preferred_state: Some("CA".to_string()),
//!     focus_pell: false,
//! };
//! let top = engine.recommend(&prefs, 10).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! unirec is composed of several crates:
//!
//! - [`unirec-catalog`](https://docs.rs/unirec-catalog) - typed feature catalog and source column contract
//! - [`unirec-core`](https://docs.rs/unirec-core) - vectors, scalers, neighbor scan
//! - [`unirec-data`](https://docs.rs/unirec-data) - dataset loading and preparation
//! - [`unirec-engine`](https://docs.rs/unirec-engine) - scoring, similarity, hybrid ranking
//! - [`unirec-api`](https://docs.rs/unirec-api) - request/response boundary

// Re-export catalog types
pub use unirec_catalog::{CategoricalFeature, MsiCategory, NumericFeature};

// Re-export core types
pub use unirec_core::{NeighborIndex, StandardScaler, Vector};

// Re-export data types
pub use unirec_data::{DataError, EncodedLayout, InstitutionRecord, InstitutionTable, PreparedDataset};

// Re-export the engine
pub use unirec_engine::{
    EngineError, HybridScore, Normalization, Preferences, Recommendation, Recommender,
    ScoringWeights, SuccessParams,
};

// Re-export the API boundary
pub use unirec_api::{handlers, HealthResponse, RecommendRequest, RecommendResponse, RecommendationDto};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        handlers, DataError, EngineError, HealthResponse, InstitutionRecord, InstitutionTable,
        MsiCategory, Normalization, Preferences, PreparedDataset, Recommendation,
        RecommendationDto, Recommender, RecommendRequest, RecommendResponse, ScoringWeights,
        SuccessParams,
    };
}
