//! Fitted standardization and score-series rescaling
//!
//! [`StandardScaler`] is fitted once on the prepared numeric columns and
//! retained: query vectors must be transformed through the *same* fitted
//! statistics to live in the encoded space. The free functions rescale a
//! score series in one shot for blending.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Zero-mean/unit-variance standardization fitted per column.
///
/// A zero-variance column keeps scale 1.0 and is only centered, so transform
/// never divides by zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    means: Vec<f64>,
    scales: Vec<f64>,
}

impl StandardScaler {
    /// Fit on column-major data: `columns[j]` holds every value of column `j`.
    ///
    /// Uses the population standard deviation, matching the statistics the
    /// encoded matrix is standardized with at preparation time.
    pub fn fit(columns: &[Vec<f64>]) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::EmptyScaler);
        }

        let mut means = Vec::with_capacity(columns.len());
        let mut scales = Vec::with_capacity(columns.len());

        for (j, column) in columns.iter().enumerate() {
            if column.is_empty() {
                return Err(Error::EmptyColumn(j));
            }
            let n = column.len() as f64;
            let mean = column.iter().sum::<f64>() / n;
            let variance = column.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
            let std = variance.sqrt();

            means.push(mean);
            scales.push(if std > f64::EPSILON { std } else { 1.0 });
        }

        Ok(Self { means, scales })
    }

    /// Number of fitted columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.means.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    #[inline]
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Standardize a single value of column `j`.
    #[inline]
    pub fn transform_value(&self, j: usize, value: f64) -> f64 {
        (value - self.means[j]) / self.scales[j]
    }

    /// Standardize a full column in place.
    pub fn transform_column(&self, j: usize, column: &mut [f64]) {
        for value in column.iter_mut() {
            *value = self.transform_value(j, *value);
        }
    }
}

/// Rescale a score series to zero mean and unit variance.
///
/// A constant series rescales to all zeros.
pub fn zscore_series(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    let std = variance.sqrt();
    let scale = if std > f64::EPSILON { std } else { 1.0 };

    series.iter().map(|x| (x - mean) / scale).collect()
}

/// Rescale a score series to the [0, 1] range.
///
/// A constant series rescales to all zeros.
pub fn minmax_series(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let min = series.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let scale = if range > f64::EPSILON { range } else { 1.0 };

    series.iter().map(|x| (x - min) / scale).collect()
}
