//! The dataset preparer
//!
//! Turns the raw merged table into the immutable artifacts every request
//! reads: the surviving-row index map, imputed numeric columns, the encoded
//! standardized matrix, the fitted scaler, and the fitted neighbor index.
//! Preparation is deterministic for fixed input and runs once at startup.

use crate::error::{DataError, Result};
use crate::layout::EncodedLayout;
use crate::table::InstitutionTable;
use std::collections::BTreeSet;
use tracing::info;
use unirec_catalog::{CategoricalFeature, MsiCategory, NumericFeature};
use unirec_core::{NeighborIndex, StandardScaler, Vector};

/// The prepared working dataset.
///
/// Row index `i` refers to the `i`-th surviving institution everywhere:
/// numeric columns, flags, states, the encoded matrix, and every score series
/// the engine computes are aligned to the same index map.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    /// Positions of surviving rows in the original table.
    row_map: Vec<usize>,
    unit_ids: Vec<u32>,
    /// Imputed, unstandardized numeric columns in catalog order.
    numeric: Vec<Vec<f64>>,
    /// Column means over surviving rows, used to impute and to fill query slots.
    numeric_means: Vec<f64>,
    flags: Vec<[bool; MsiCategory::COUNT]>,
    /// State abbreviation per surviving row, for the state-preference bonus.
    states: Vec<String>,
    layout: EncodedLayout,
    scaler: StandardScaler,
    index: NeighborIndex,
}

impl PreparedDataset {
    /// Run the full preparation pipeline over the loaded table.
    pub fn prepare(table: &InstitutionTable) -> Result<Self> {
        // 1-2. Project onto catalog features and hard-filter on key features.
        let row_map: Vec<usize> = table
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.has_key_features())
            .map(|(i, _)| i)
            .collect();

        if row_map.is_empty() {
            return Err(DataError::NoSurvivingRows);
        }

        let survivors: Vec<_> = row_map.iter().map(|&i| &table.records()[i]).collect();
        let unit_ids: Vec<u32> = survivors.iter().map(|r| r.unit_id).collect();

        // 3. Mean-impute remaining numeric gaps.
        let mut numeric = Vec::with_capacity(NumericFeature::COUNT);
        let mut numeric_means = Vec::with_capacity(NumericFeature::COUNT);
        for feature in NumericFeature::ALL {
            let observed: Vec<f64> = survivors.iter().filter_map(|r| r.numeric(feature)).collect();
            if observed.is_empty() {
                return Err(DataError::AllMissingColumn(feature.column_name()));
            }
            let mean = observed.iter().sum::<f64>() / observed.len() as f64;

            let column: Vec<f64> = survivors
                .iter()
                .map(|r| r.numeric(feature).unwrap_or(mean))
                .collect();
            numeric.push(column);
            numeric_means.push(mean);
        }

        // Key features guarantee these are present for every survivor.
        let flags: Vec<[bool; MsiCategory::COUNT]> = survivors
            .iter()
            .map(|r| {
                let mut row_flags = [false; MsiCategory::COUNT];
                for category in MsiCategory::ALL {
                    row_flags[category.index()] = r.msi_flag(category).unwrap_or(false);
                }
                row_flags
            })
            .collect();

        let states: Vec<String> = survivors
            .iter()
            .map(|r| {
                r.categorical(CategoricalFeature::StateAbbreviation)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();

        // 5. One-hot layout from distinct observed levels, drop-first.
        let observed_levels: Vec<Vec<String>> = CategoricalFeature::ALL
            .iter()
            .map(|&feature| {
                let levels: BTreeSet<String> = survivors
                    .iter()
                    .filter_map(|r| r.categorical(feature))
                    .map(str::to_string)
                    .collect();
                levels.into_iter().collect()
            })
            .collect();
        let layout = EncodedLayout::build(observed_levels);

        // 6. Standardize numeric columns; the fitted scaler is retained so
        // query vectors can be transformed into the same space.
        let scaler = StandardScaler::fit(&numeric)?;

        // 7. Assemble the encoded matrix and fit the neighbor index.
        let mut encoded = Vec::with_capacity(survivors.len());
        for (i, record) in survivors.iter().enumerate() {
            let mut row = vec![0.0; layout.dim()];
            for feature in NumericFeature::ALL {
                let j = feature.index();
                row[EncodedLayout::numeric_slot(feature)] =
                    scaler.transform_value(j, numeric[j][i]);
            }
            for category in MsiCategory::ALL {
                if flags[i][category.index()] {
                    row[EncodedLayout::msi_slot(category)] = 1.0;
                }
            }
            for &feature in &CategoricalFeature::ALL {
                if let Some(level) = record.categorical(feature) {
                    if let Some(slot) = layout.level_slot(feature, level) {
                        row[slot] = 1.0;
                    }
                }
            }
            encoded.push(Vector::new(row));
        }
        let index = NeighborIndex::fit(encoded)?;

        info!(
            rows = table.len(),
            survivors = row_map.len(),
            encoded_dim = layout.dim(),
            "prepared institutional dataset"
        );

        Ok(Self {
            row_map,
            unit_ids,
            numeric,
            numeric_means,
            flags,
            states,
            layout,
            scaler,
            index,
        })
    }

    /// Number of surviving rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.row_map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_map.is_empty()
    }

    /// Positions of surviving rows in the original table.
    #[inline]
    pub fn row_map(&self) -> &[usize] {
        &self.row_map
    }

    /// `Unit ID` per surviving row.
    #[inline]
    pub fn unit_ids(&self) -> &[u32] {
        &self.unit_ids
    }

    /// Imputed, unstandardized values of one numeric feature.
    #[inline]
    pub fn numeric_column(&self, feature: NumericFeature) -> &[f64] {
        &self.numeric[feature.index()]
    }

    /// Mean of one numeric feature over surviving rows.
    #[inline]
    pub fn numeric_mean(&self, feature: NumericFeature) -> f64 {
        self.numeric_means[feature.index()]
    }

    /// MSI flags per surviving row.
    #[inline]
    pub fn flags(&self) -> &[[bool; MsiCategory::COUNT]] {
        &self.flags
    }

    /// State abbreviation per surviving row.
    #[inline]
    pub fn states(&self) -> &[String] {
        &self.states
    }

    #[inline]
    pub fn layout(&self) -> &EncodedLayout {
        &self.layout
    }

    #[inline]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    #[inline]
    pub fn index(&self) -> &NeighborIndex {
        &self.index
    }
}
