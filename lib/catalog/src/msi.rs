//! Minority-serving-institution categories
//!
//! Seven independent boolean flags per institution. The flags are not
//! mutually exclusive: an institution can hold several designations at once,
//! and each matched preference earns its own scoring bonus.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven minority-serving-institution designations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MsiCategory {
    /// Hispanic-Serving Institution
    Hsi,
    /// Predominantly Black Institution
    Pbi,
    /// Asian American and Native American Pacific Islander-Serving Institution
    Aanapii,
    /// Alaska Native and Native Hawaiian-Serving Institution
    Annhi,
    /// Historically Black College or University
    Hbcu,
    /// Tribal College or University
    Tribal,
    /// Native American Non-Tribal Institution
    Nanti,
}

impl MsiCategory {
    /// All categories, in encoded-matrix column order.
    pub const ALL: [MsiCategory; 7] = [
        MsiCategory::Hsi,
        MsiCategory::Pbi,
        MsiCategory::Aanapii,
        MsiCategory::Annhi,
        MsiCategory::Hbcu,
        MsiCategory::Tribal,
        MsiCategory::Nanti,
    ];

    /// Number of MSI categories.
    pub const COUNT: usize = Self::ALL.len();

    /// The category code, which is also the exact source column name.
    pub fn code(self) -> &'static str {
        match self {
            MsiCategory::Hsi => "HSI",
            MsiCategory::Pbi => "PBI",
            MsiCategory::Aanapii => "AANAPII",
            MsiCategory::Annhi => "ANNHI",
            MsiCategory::Hbcu => "HBCU",
            MsiCategory::Tribal => "TRIBAL",
            MsiCategory::Nanti => "NANTI",
        }
    }

    /// Position of this category within [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MsiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MsiCategory {
    type Err = UnknownMsiCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMsiCode(s.to_string()))
    }
}

/// Error for an MSI code that is not one of the seven known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown MSI category code: {0}")]
pub struct UnknownMsiCode(pub String);
