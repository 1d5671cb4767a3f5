//! Numeric and categorical feature definitions
//!
//! Variant order is load-bearing: it fixes the column order of the encoded
//! matrix, so `as usize` doubles as the encoded-slot index within each family.

use serde::{Deserialize, Serialize};

/// A numeric column of the merged institutional table.
///
/// Covers cost, affordability context, childcare, outcome, and spending
/// features. All of these are mean-imputed during preparation except the key
/// features, whose absence disqualifies the row instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericFeature {
    NetPrice,
    NetPriceAfterGrants2020,
    NetPriceAfterGrants2019,
    NetPriceAfterGrants2018,
    AffordabilityGap,
    WeeklyHoursToCloseGap,
    StateMinimumWage,
    TenHourWeekWageIncome,
    MonthlyCenterChildCare,
    AdjustedMonthlyCenterChildCare,
    AnnualCenterChildCare,
    MonthlyHomeChildCare,
    AdjustedMonthlyHomeChildCare,
    AnnualHomeChildCare,
    RetentionRate,
    GradRate6Year,
    GradRate4Year,
    GradRate5Year,
    PellAwardPercent,
    PellGradRate6Year,
    MedianEarnings,
    MedianEarningsDependent,
    MedianEarningsIndependent,
    InstructionalExpensesPerFte,
    InstructionalExpensesFasbPerFte,
    EndowmentAssetsPerStudent,
}

impl NumericFeature {
    /// All numeric features, in encoded-matrix column order.
    pub const ALL: [NumericFeature; 26] = [
        NumericFeature::NetPrice,
        NumericFeature::NetPriceAfterGrants2020,
        NumericFeature::NetPriceAfterGrants2019,
        NumericFeature::NetPriceAfterGrants2018,
        NumericFeature::AffordabilityGap,
        NumericFeature::WeeklyHoursToCloseGap,
        NumericFeature::StateMinimumWage,
        NumericFeature::TenHourWeekWageIncome,
        NumericFeature::MonthlyCenterChildCare,
        NumericFeature::AdjustedMonthlyCenterChildCare,
        NumericFeature::AnnualCenterChildCare,
        NumericFeature::MonthlyHomeChildCare,
        NumericFeature::AdjustedMonthlyHomeChildCare,
        NumericFeature::AnnualHomeChildCare,
        NumericFeature::RetentionRate,
        NumericFeature::GradRate6Year,
        NumericFeature::GradRate4Year,
        NumericFeature::GradRate5Year,
        NumericFeature::PellAwardPercent,
        NumericFeature::PellGradRate6Year,
        NumericFeature::MedianEarnings,
        NumericFeature::MedianEarningsDependent,
        NumericFeature::MedianEarningsIndependent,
        NumericFeature::InstructionalExpensesPerFte,
        NumericFeature::InstructionalExpensesFasbPerFte,
        NumericFeature::EndowmentAssetsPerStudent,
    ];

    /// Number of numeric features.
    pub const COUNT: usize = Self::ALL.len();

    /// Exact column name in the merged source table.
    pub fn column_name(self) -> &'static str {
        match self {
            NumericFeature::NetPrice => "Net Price",
            NumericFeature::NetPriceAfterGrants2020 => {
                "Average Net Price After Grants, 2020-21"
            }
            NumericFeature::NetPriceAfterGrants2019 => {
                "Average Net Price After Grants, 2019-20"
            }
            NumericFeature::NetPriceAfterGrants2018 => {
                "Average Net Price After Grants, 2018-19"
            }
            NumericFeature::AffordabilityGap => {
                "Affordability Gap (net price minus income earned working 10 hrs at min wage)"
            }
            NumericFeature::WeeklyHoursToCloseGap => "Weekly Hours to Close Gap",
            NumericFeature::StateMinimumWage => "State Minimum Wage",
            NumericFeature::TenHourWeekWageIncome => {
                "Income Earned from Working 10 Hours a Week at State's Minimum Wage"
            }
            NumericFeature::MonthlyCenterChildCare => "Monthly Center-Based Child Care Cost",
            NumericFeature::AdjustedMonthlyCenterChildCare => {
                "Adjusted Monthly Center-Based Child Care Cost"
            }
            NumericFeature::AnnualCenterChildCare => "Annual Center-Based Child Care Cost",
            NumericFeature::MonthlyHomeChildCare => "Monthly Home-Based Child Care Cost",
            NumericFeature::AdjustedMonthlyHomeChildCare => {
                "Adjusted Monthly Home-Based Child Care Cost"
            }
            NumericFeature::AnnualHomeChildCare => "Annual Home-Based Child Care Cost",
            NumericFeature::RetentionRate => "First-Time, Full-Time Retention Rate",
            NumericFeature::GradRate6Year => {
                "Bachelor's Degree Graduation Rate Bachelor Degree Within 6 Years - Total"
            }
            NumericFeature::GradRate4Year => {
                "Bachelor's Degree Graduation Rate Within 4 Years - Total"
            }
            NumericFeature::GradRate5Year => {
                "Bachelor's Degree Graduation Rate Within 5 Years - Total"
            }
            NumericFeature::PellAwardPercent => {
                "Percent of First-Time, Full-Time Undergraduates Awarded Pell Grants"
            }
            NumericFeature::PellGradRate6Year => {
                "Percent Full-time, First-time, Pell Grant Recipients Receiving an Award - 6 Years"
            }
            NumericFeature::MedianEarnings => {
                "Median Earnings of Students Working and Not Enrolled 10 Years After Entry"
            }
            NumericFeature::MedianEarningsDependent => {
                "Median Earnings of Dependent Students Working and Not Enrolled 10 Years After Entry"
            }
            NumericFeature::MedianEarningsIndependent => {
                "Median Earnings of Independent Students Working and Not Enrolled 10 Years After Entry"
            }
            NumericFeature::InstructionalExpensesPerFte => "Instructional Expenses Per FTE",
            NumericFeature::InstructionalExpensesFasbPerFte => {
                "Instructional Expenses FASB per FTE"
            }
            NumericFeature::EndowmentAssetsPerStudent => "Endowment Assets FASB per Student",
        }
    }

    /// Position of this feature within [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key features disqualify a row when missing instead of being imputed.
    pub fn is_key(self) -> bool {
        matches!(
            self,
            NumericFeature::NetPrice
                | NumericFeature::RetentionRate
                | NumericFeature::GradRate6Year
        )
    }
}

/// A categorical column of the merged institutional table.
///
/// Categorical features are one-hot encoded for similarity search, with one
/// reference level dropped per feature. All five are key features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoricalFeature {
    StateAbbreviation,
    Region,
    InstitutionSizeCategory,
    Sector,
    HighestDegreeOffered,
}

impl CategoricalFeature {
    /// All categorical features, in encoded-matrix block order.
    pub const ALL: [CategoricalFeature; 5] = [
        CategoricalFeature::StateAbbreviation,
        CategoricalFeature::Region,
        CategoricalFeature::InstitutionSizeCategory,
        CategoricalFeature::Sector,
        CategoricalFeature::HighestDegreeOffered,
    ];

    /// Number of categorical features.
    pub const COUNT: usize = Self::ALL.len();

    /// Exact column name in the merged source table.
    pub fn column_name(self) -> &'static str {
        match self {
            CategoricalFeature::StateAbbreviation => "State Abbreviation",
            CategoricalFeature::Region => "Region",
            CategoricalFeature::InstitutionSizeCategory => "Institution Size Category Name",
            CategoricalFeature::Sector => "Sector Name",
            CategoricalFeature::HighestDegreeOffered => "Highest Degree Offered Name",
        }
    }

    /// Position of this feature within [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
