//! # unirec Data
//!
//! Dataset loading and preparation for the unirec recommendation engine.
//!
//! The engine consumes one pre-merged tabular source keyed by `Unit ID`.
//! This crate loads it ([`InstitutionTable`]) and prepares it once at startup
//! ([`PreparedDataset::prepare`]):
//!
//! 1. project onto the catalog's feature columns
//! 2. hard-filter rows missing any key feature
//! 3. mean-impute the remaining numeric gaps
//! 4. record the surviving row index map
//! 5. one-hot encode categoricals with a dropped reference level
//! 6. standardize numeric columns (fitted scaler retained for query vectors)
//! 7. fit the Euclidean neighbor index over the encoded matrix
//!
//! The prepared dataset is immutable; requests only read from it.

pub mod error;
pub mod layout;
pub mod prepare;
pub mod record;
pub mod table;

pub use error::{DataError, Result};
pub use layout::{CategoricalBlock, EncodedLayout};
pub use prepare::PreparedDataset;
pub use record::InstitutionRecord;
pub use table::InstitutionTable;
