//! Calculator data types.

use livingcost_shared::config::StipendConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly stipend rates in the base currency.
///
/// Passed explicitly to the calculator so callers (and tests) can supply
/// their own figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StipendRates {
    /// Main applicant, per month.
    pub applicant_monthly: Decimal,
    /// Accompanying spouse, per month.
    pub spouse_monthly: Decimal,
    /// Each accompanying child, per month.
    pub child_monthly: Decimal,
}

impl StipendRates {
    /// Creates a new set of rates.
    #[must_use]
    pub const fn new(applicant_monthly: Decimal, spouse_monthly: Decimal, child_monthly: Decimal) -> Self {
        Self {
            applicant_monthly,
            spouse_monthly,
            child_monthly,
        }
    }
}

impl Default for StipendRates {
    fn default() -> Self {
        Self::from(&StipendConfig::default())
    }
}

impl From<&StipendConfig> for StipendRates {
    fn from(config: &StipendConfig) -> Self {
        Self::new(
            config.applicant_monthly,
            config.spouse_monthly,
            config.child_monthly,
        )
    }
}

/// User-supplied calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// Units of converted currency per unit of base currency.
    pub exchange_rate: Decimal,
    /// Number of months the stay covers.
    pub duration_months: i64,
    /// Whether a spouse travels with the applicant.
    pub spouse_present: bool,
    /// Number of accompanying children (0-5).
    pub child_count: u8,
    /// Extra bank balance on top of the minimum, in percent (10-100, step 5).
    pub margin_percent: u8,
}

impl Default for ExpenseInput {
    fn default() -> Self {
        Self {
            exchange_rate: Decimal::from(30),
            duration_months: 13,
            spouse_present: true,
            child_count: 0,
            margin_percent: 30,
        }
    }
}

/// Row of the breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Main applicant.
    Applicant,
    /// Accompanying spouse.
    Spouse,
    /// All accompanying children together.
    Children,
    /// Sum of the other rows.
    Total,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Self; 4] = [Self::Applicant, Self::Spouse, Self::Children, Self::Total];

    /// Label shown in the table and the export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicant => "You",
            Self::Spouse => "Spouse",
            Self::Children => "Kids",
            Self::Total => "Total",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Amounts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// Which row this is.
    pub category: Category,
    /// Cost in the base currency.
    pub base: Decimal,
    /// Cost in the converted currency.
    pub converted: Decimal,
    /// Converted cost inflated by the margin.
    pub with_margin: Decimal,
}

/// Full result of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Input the breakdown was computed from.
    pub input: ExpenseInput,
    /// Main applicant row.
    pub applicant: BreakdownRow,
    /// Spouse row (zero when no spouse travels).
    pub spouse: BreakdownRow,
    /// Children row.
    pub children: BreakdownRow,
    /// Sum of the three rows above.
    pub total: BreakdownRow,
}

impl CostBreakdown {
    /// Rows in table order: You, Spouse, Kids, Total.
    #[must_use]
    pub const fn rows(&self) -> [BreakdownRow; 4] {
        [self.applicant, self.spouse, self.children, self.total]
    }

    /// Row for a single category.
    #[must_use]
    pub const fn row(&self, category: Category) -> BreakdownRow {
        match category {
            Category::Applicant => self.applicant,
            Category::Spouse => self.spouse,
            Category::Children => self.children,
            Category::Total => self.total,
        }
    }
}
