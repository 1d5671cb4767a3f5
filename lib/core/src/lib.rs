//! # unirec Core
//!
//! Core numeric primitives for the unirec recommendation engine.
//!
//! This crate provides the building blocks the engine composes:
//!
//! - [`Vector`] - dense f64 vector with Euclidean distance
//! - [`StandardScaler`] - fitted zero-mean/unit-variance column standardization
//! - [`NeighborIndex`] - Euclidean index that scores *every* fitted row
//! - [`zscore_series`] / [`minmax_series`] - score-series rescaling
//!
//! ## Example
//!
//! ```rust
//! use unirec_core::{NeighborIndex, Vector};
//!
//! let rows = vec![
//!     Vector::new(vec![0.0, 0.0]),
//!     Vector::new(vec![3.0, 4.0]),
//! ];
//! let index = NeighborIndex::fit(rows).unwrap();
//!
//! let distances = index.distances(&Vector::new(vec![0.0, 0.0])).unwrap();
//! assert_eq!(distances, vec![0.0, 5.0]);
//! ```

pub mod error;
pub mod neighbors;
pub mod scaler;
pub mod vector;

pub use error::{Error, Result};
pub use neighbors::NeighborIndex;
pub use scaler::{minmax_series, zscore_series, StandardScaler};
pub use vector::Vector;
