//! # unirec Catalog
//!
//! The feature catalog for the unirec recommendation engine.
//!
//! This crate is the single source of truth for which columns of the merged
//! institutional table the engine consumes. Exact column names are part of
//! the contract with the upstream data pipeline: renaming a source column is
//! a breaking change.
//!
//! Three feature families are defined:
//!
//! - [`NumericFeature`] - continuous cost, affordability, and outcome columns
//! - [`MsiCategory`] - the seven independent minority-serving-institution flags
//! - [`CategoricalFeature`] - identity/classification columns that get one-hot
//!   encoded for similarity search
//!
//! A subset of features is *key*: a row missing any key feature is excluded
//! from the working dataset entirely (see [`NumericFeature::is_key`]).

pub mod features;
pub mod msi;

pub use features::{CategoricalFeature, NumericFeature};
pub use msi::{MsiCategory, UnknownMsiCode};
