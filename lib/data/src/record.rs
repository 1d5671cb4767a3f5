//! The institution record
//!
//! One row of the merged institutional table. Serde renames carry the exact
//! source column names: renaming an upstream column is a breaking change and
//! surfaces here.

use serde::{Deserialize, Serialize};
use unirec_catalog::{CategoricalFeature, MsiCategory, NumericFeature};

/// One accredited institution, keyed by its stable numeric `Unit ID`.
///
/// Numeric and flag columns are `Option` because the raw table has gaps; the
/// preparer decides which gaps disqualify a row and which get imputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    #[serde(rename = "Unit ID")]
    pub unit_id: u32,
    #[serde(rename = "Institution Name")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "MSI Status")]
    pub msi_status: Option<String>,

    // Categorical classification
    #[serde(rename = "State Abbreviation")]
    pub state: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
    #[serde(rename = "Institution Size Category Name")]
    pub size_category: Option<String>,
    #[serde(rename = "Sector Name")]
    pub sector: Option<String>,
    #[serde(rename = "Highest Degree Offered Name")]
    pub highest_degree: Option<String>,

    // MSI flags (0/1 in the source)
    #[serde(rename = "HSI")]
    pub hsi: Option<f64>,
    #[serde(rename = "PBI")]
    pub pbi: Option<f64>,
    #[serde(rename = "AANAPII")]
    pub aanapii: Option<f64>,
    #[serde(rename = "ANNHI")]
    pub annhi: Option<f64>,
    #[serde(rename = "HBCU")]
    pub hbcu: Option<f64>,
    #[serde(rename = "TRIBAL")]
    pub tribal: Option<f64>,
    #[serde(rename = "NANTI")]
    pub nanti: Option<f64>,

    // Cost
    #[serde(rename = "Net Price")]
    pub net_price: Option<f64>,
    #[serde(rename = "Average Net Price After Grants, 2020-21")]
    pub net_price_after_grants_2020: Option<f64>,
    #[serde(rename = "Average Net Price After Grants, 2019-20")]
    pub net_price_after_grants_2019: Option<f64>,
    #[serde(rename = "Average Net Price After Grants, 2018-19")]
    pub net_price_after_grants_2018: Option<f64>,

    // Affordability context
    #[serde(rename = "Affordability Gap (net price minus income earned working 10 hrs at min wage)")]
    pub affordability_gap: Option<f64>,
    #[serde(rename = "Weekly Hours to Close Gap")]
    pub weekly_hours_to_close_gap: Option<f64>,
    #[serde(rename = "State Minimum Wage")]
    pub state_minimum_wage: Option<f64>,
    #[serde(rename = "Income Earned from Working 10 Hours a Week at State's Minimum Wage")]
    pub ten_hour_week_wage_income: Option<f64>,
    #[serde(rename = "Monthly Center-Based Child Care Cost")]
    pub monthly_center_child_care: Option<f64>,
    #[serde(rename = "Adjusted Monthly Center-Based Child Care Cost")]
    pub adjusted_monthly_center_child_care: Option<f64>,
    #[serde(rename = "Annual Center-Based Child Care Cost")]
    pub annual_center_child_care: Option<f64>,
    #[serde(rename = "Monthly Home-Based Child Care Cost")]
    pub monthly_home_child_care: Option<f64>,
    #[serde(rename = "Adjusted Monthly Home-Based Child Care Cost")]
    pub adjusted_monthly_home_child_care: Option<f64>,
    #[serde(rename = "Annual Home-Based Child Care Cost")]
    pub annual_home_child_care: Option<f64>,

    // Outcomes
    #[serde(rename = "First-Time, Full-Time Retention Rate")]
    pub retention_rate: Option<f64>,
    #[serde(rename = "Bachelor's Degree Graduation Rate Bachelor Degree Within 6 Years - Total")]
    pub grad_rate_6yr: Option<f64>,
    #[serde(rename = "Bachelor's Degree Graduation Rate Within 4 Years - Total")]
    pub grad_rate_4yr: Option<f64>,
    #[serde(rename = "Bachelor's Degree Graduation Rate Within 5 Years - Total")]
    pub grad_rate_5yr: Option<f64>,
    #[serde(rename = "Percent of First-Time, Full-Time Undergraduates Awarded Pell Grants")]
    pub pell_award_percent: Option<f64>,
    #[serde(rename = "Percent Full-time, First-time, Pell Grant Recipients Receiving an Award - 6 Years")]
    pub pell_grad_rate_6yr: Option<f64>,
    #[serde(rename = "Median Earnings of Students Working and Not Enrolled 10 Years After Entry")]
    pub median_earnings: Option<f64>,
    #[serde(rename = "Median Earnings of Dependent Students Working and Not Enrolled 10 Years After Entry")]
    pub median_earnings_dependent: Option<f64>,
    #[serde(rename = "Median Earnings of Independent Students Working and Not Enrolled 10 Years After Entry")]
    pub median_earnings_independent: Option<f64>,

    // Spending and financial health
    #[serde(rename = "Instructional Expenses Per FTE")]
    pub instructional_expenses_per_fte: Option<f64>,
    #[serde(rename = "Instructional Expenses FASB per FTE")]
    pub instructional_expenses_fasb_per_fte: Option<f64>,
    #[serde(rename = "Endowment Assets FASB per Student")]
    pub endowment_assets_per_student: Option<f64>,
}

impl InstitutionRecord {
    /// Value of a numeric catalog feature.
    pub fn numeric(&self, feature: NumericFeature) -> Option<f64> {
        match feature {
            NumericFeature::NetPrice => self.net_price,
            NumericFeature::NetPriceAfterGrants2020 => self.net_price_after_grants_2020,
            NumericFeature::NetPriceAfterGrants2019 => self.net_price_after_grants_2019,
            NumericFeature::NetPriceAfterGrants2018 => self.net_price_after_grants_2018,
            NumericFeature::AffordabilityGap => self.affordability_gap,
            NumericFeature::WeeklyHoursToCloseGap => self.weekly_hours_to_close_gap,
            NumericFeature::StateMinimumWage => self.state_minimum_wage,
            NumericFeature::TenHourWeekWageIncome => self.ten_hour_week_wage_income,
            NumericFeature::MonthlyCenterChildCare => self.monthly_center_child_care,
            NumericFeature::AdjustedMonthlyCenterChildCare => {
                self.adjusted_monthly_center_child_care
            }
            NumericFeature::AnnualCenterChildCare => self.annual_center_child_care,
            NumericFeature::MonthlyHomeChildCare => self.monthly_home_child_care,
            NumericFeature::AdjustedMonthlyHomeChildCare => self.adjusted_monthly_home_child_care,
            NumericFeature::AnnualHomeChildCare => self.annual_home_child_care,
            NumericFeature::RetentionRate => self.retention_rate,
            NumericFeature::GradRate6Year => self.grad_rate_6yr,
            NumericFeature::GradRate4Year => self.grad_rate_4yr,
            NumericFeature::GradRate5Year => self.grad_rate_5yr,
            NumericFeature::PellAwardPercent => self.pell_award_percent,
            NumericFeature::PellGradRate6Year => self.pell_grad_rate_6yr,
            NumericFeature::MedianEarnings => self.median_earnings,
            NumericFeature::MedianEarningsDependent => self.median_earnings_dependent,
            NumericFeature::MedianEarningsIndependent => self.median_earnings_independent,
            NumericFeature::InstructionalExpensesPerFte => self.instructional_expenses_per_fte,
            NumericFeature::InstructionalExpensesFasbPerFte => {
                self.instructional_expenses_fasb_per_fte
            }
            NumericFeature::EndowmentAssetsPerStudent => self.endowment_assets_per_student,
        }
    }

    /// Whether an MSI flag is set; `None` when the flag column is missing.
    pub fn msi_flag(&self, category: MsiCategory) -> Option<bool> {
        let raw = match category {
            MsiCategory::Hsi => self.hsi,
            MsiCategory::Pbi => self.pbi,
            MsiCategory::Aanapii => self.aanapii,
            MsiCategory::Annhi => self.annhi,
            MsiCategory::Hbcu => self.hbcu,
            MsiCategory::Tribal => self.tribal,
            MsiCategory::Nanti => self.nanti,
        };
        raw.map(|v| v > 0.5)
    }

    /// Value of a categorical catalog feature.
    pub fn categorical(&self, feature: CategoricalFeature) -> Option<&str> {
        let value = match feature {
            CategoricalFeature::StateAbbreviation => &self.state,
            CategoricalFeature::Region => &self.region,
            CategoricalFeature::InstitutionSizeCategory => &self.size_category,
            CategoricalFeature::Sector => &self.sector,
            CategoricalFeature::HighestDegreeOffered => &self.highest_degree,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// A row qualifies for the working dataset only with every key feature
    /// present: net price, retention, 6-year graduation rate, all MSI flags,
    /// all categorical fields.
    pub fn has_key_features(&self) -> bool {
        NumericFeature::ALL
            .iter()
            .filter(|f| f.is_key())
            .all(|f| self.numeric(*f).is_some())
            && MsiCategory::ALL.iter().all(|c| self.msi_flag(*c).is_some())
            && CategoricalFeature::ALL
                .iter()
                .all(|f| self.categorical(*f).is_some())
    }
}
