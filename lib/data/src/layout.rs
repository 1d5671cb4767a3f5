//! Encoded-matrix layout
//!
//! Maps every feature to its slot in the encoded space: numeric features
//! first (catalog order), then the seven MSI flags, then one one-hot block
//! per categorical feature. Each block drops its lexicographically first
//! observed level as the reference, so a categorical with `k` observed levels
//! contributes `k - 1` columns.

use ahash::AHashMap;
use unirec_catalog::{CategoricalFeature, MsiCategory, NumericFeature};

/// One-hot block for a single categorical feature.
#[derive(Debug, Clone)]
pub struct CategoricalBlock {
    pub feature: CategoricalFeature,
    /// Kept levels in sorted order; the dropped reference level is not here.
    pub levels: Vec<String>,
    /// Slot of the first kept level.
    pub offset: usize,
    slots: AHashMap<String, usize>,
}

impl CategoricalBlock {
    fn new(feature: CategoricalFeature, levels: Vec<String>, offset: usize) -> Self {
        let slots = levels
            .iter()
            .enumerate()
            .map(|(i, level)| (level.clone(), offset + i))
            .collect();
        Self {
            feature,
            levels,
            offset,
            slots,
        }
    }

    /// Slot of a level; `None` for the reference level and unobserved values.
    pub fn level_slot(&self, level: &str) -> Option<usize> {
        self.slots.get(level).copied()
    }
}

/// Slot map of the full encoded space.
#[derive(Debug, Clone)]
pub struct EncodedLayout {
    blocks: Vec<CategoricalBlock>,
    dim: usize,
}

impl EncodedLayout {
    /// Build the layout from the distinct observed levels per categorical
    /// feature, given in [`CategoricalFeature::ALL`] order and sorted
    /// ascending. The first level of each list becomes the reference.
    pub fn build(observed_levels: Vec<Vec<String>>) -> Self {
        debug_assert_eq!(observed_levels.len(), CategoricalFeature::COUNT);

        let mut offset = NumericFeature::COUNT + MsiCategory::COUNT;
        let mut blocks = Vec::with_capacity(CategoricalFeature::COUNT);

        for (feature, mut levels) in CategoricalFeature::ALL.into_iter().zip(observed_levels) {
            // Drop the reference level; a single-level feature keeps nothing.
            if !levels.is_empty() {
                levels.remove(0);
            }
            let block = CategoricalBlock::new(feature, levels, offset);
            offset += block.levels.len();
            blocks.push(block);
        }

        Self {
            blocks,
            dim: offset,
        }
    }

    /// Total dimension of the encoded space.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Slot of a numeric feature.
    #[inline]
    pub fn numeric_slot(feature: NumericFeature) -> usize {
        feature.index()
    }

    /// Slot of an MSI flag.
    #[inline]
    pub fn msi_slot(category: MsiCategory) -> usize {
        NumericFeature::COUNT + category.index()
    }

    /// Slot of a categorical level; `None` for reference/unobserved levels.
    pub fn level_slot(&self, feature: CategoricalFeature, level: &str) -> Option<usize> {
        self.blocks[feature.index()].level_slot(level)
    }

    /// The one-hot blocks, in [`CategoricalFeature::ALL`] order.
    #[inline]
    pub fn blocks(&self) -> &[CategoricalBlock] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_layout() -> EncodedLayout {
        EncodedLayout::build(vec![
            strings(&["AL", "CA", "TX"]),
            strings(&["Far West", "Southeast"]),
            strings(&["Large", "Small"]),
            strings(&["Private", "Public"]),
            strings(&["Bachelor's", "Doctor's"]),
        ])
    }

    #[test]
    fn test_dimension_drops_reference_levels() {
        let layout = sample_layout();
        // 26 numeric + 7 MSI + (2 + 1 + 1 + 1 + 1) kept levels
        assert_eq!(layout.dim(), 26 + 7 + 6);
    }

    #[test]
    fn test_numeric_and_msi_slots() {
        assert_eq!(EncodedLayout::numeric_slot(NumericFeature::NetPrice), 0);
        assert_eq!(
            EncodedLayout::numeric_slot(NumericFeature::AffordabilityGap),
            4
        );
        assert_eq!(EncodedLayout::msi_slot(MsiCategory::Hsi), 26);
        assert_eq!(EncodedLayout::msi_slot(MsiCategory::Nanti), 32);
    }

    #[test]
    fn test_reference_level_has_no_slot() {
        let layout = sample_layout();
        // "AL" sorts first so it is the dropped reference
        assert_eq!(
            layout.level_slot(CategoricalFeature::StateAbbreviation, "AL"),
            None
        );
        assert_eq!(
            layout.level_slot(CategoricalFeature::StateAbbreviation, "CA"),
            Some(33)
        );
        assert_eq!(
            layout.level_slot(CategoricalFeature::StateAbbreviation, "TX"),
            Some(34)
        );
    }

    #[test]
    fn test_unobserved_level_has_no_slot() {
        let layout = sample_layout();
        assert_eq!(
            layout.level_slot(CategoricalFeature::StateAbbreviation, "ZZ"),
            None
        );
    }

    #[test]
    fn test_blocks_are_contiguous() {
        let layout = sample_layout();
        let mut expected = 33;
        for block in layout.blocks() {
            assert_eq!(block.offset, expected);
            expected += block.levels.len();
        }
        assert_eq!(expected, layout.dim());
    }
}
