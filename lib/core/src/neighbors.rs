//! Euclidean neighbor index over the encoded matrix
//!
//! Unlike a top-k index, [`NeighborIndex::distances`] scores *every* fitted
//! row against the query: the engine needs a dense similarity series, not a
//! candidate shortlist. The fitted matrix is retained as a named artifact and
//! can be read back via [`NeighborIndex::rows`].

use crate::error::{Error, Result};
use crate::vector::Vector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Brute-force Euclidean index over a fixed set of rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborIndex {
    rows: Vec<Vector>,
    dim: usize,
}

impl NeighborIndex {
    /// Fit the index over the given rows.
    ///
    /// All rows must share one dimension; fitting zero rows is an error.
    pub fn fit(rows: Vec<Vector>) -> Result<Self> {
        let dim = match rows.first() {
            Some(first) => first.dim(),
            None => return Err(Error::EmptyIndex),
        };

        for row in &rows {
            if row.dim() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.dim(),
                });
            }
        }

        Ok(Self { rows, dim })
    }

    /// Number of fitted rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dimension of the fitted space.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The encoded matrix the index was fitted on, in row order.
    #[inline]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Euclidean distance from `query` to every fitted row, in row order.
    pub fn distances(&self, query: &Vector) -> Result<Vec<f64>> {
        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        Ok(self
            .rows
            .par_iter()
            .map(|row| row.euclidean_distance(query))
            .collect())
    }
}
