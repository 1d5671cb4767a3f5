//! # unirec API
//!
//! Transport-agnostic request/response boundary for the unirec engine.
//!
//! The HTTP server that fronts the engine lives elsewhere; this crate owns
//! what crosses the wire: the camelCase request DTO with its documented
//! defaults, the success/error response envelope, and the handler functions
//! that catch engine failures so one bad request can never take the process
//! down.
//!
//! ## Example
//!
//! ```rust,no_run
//! use unirec_api::{handlers, RecommendRequest};
//! use unirec_engine::Recommender;
//!
//! let engine = Recommender::open("processed_data/merged_dataset.csv").unwrap();
//!
//! let request: RecommendRequest =
//!     serde_json::from_str(r#"{"preferredState": "CA", "topN": 5}"#).unwrap();
//! let response = handlers::recommend(&engine, request);
//! assert!(response.success);
//! ```

pub mod dto;
pub mod handlers;

pub use dto::{HealthResponse, RecommendRequest, RecommendResponse, RecommendationDto};
