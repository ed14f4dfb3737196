//! Four-row breakdown table.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::format_amount;
use crate::currency::CurrencyPair;
use crate::expense::{Category, CostBreakdown};

/// One table row with unrounded amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Row label ("You", "Spouse", "Kids", "Total").
    pub label: &'static str,
    /// Base currency amount.
    pub base: Decimal,
    /// Converted currency amount.
    pub converted: Decimal,
    /// Converted amount with the user's margin.
    pub expected: Decimal,
}

impl TableRow {
    /// Amounts formatted for display, in column order.
    #[must_use]
    pub fn display_values(&self) -> [String; 3] {
        [
            format_amount(self.base),
            format_amount(self.converted),
            format_amount(self.expected),
        ]
    }
}

/// Breakdown table: a header and exactly four rows in fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownTable {
    /// Column headers, e.g. `Applicant, SEK, LKR, Expected LKR`.
    pub headers: [String; 4],
    /// Rows in the order You, Spouse, Kids, Total.
    pub rows: Vec<TableRow>,
}

impl BreakdownTable {
    /// Builds the table from a breakdown.
    #[must_use]
    pub fn new(breakdown: &CostBreakdown, pair: CurrencyPair) -> Self {
        let headers = [
            "Applicant".to_string(),
            pair.base.to_string(),
            pair.converted.to_string(),
            format!("Expected {}", pair.converted),
        ];
        let rows = Category::ALL
            .iter()
            .map(|&category| {
                let row = breakdown.row(category);
                TableRow {
                    label: category.label(),
                    base: row.base,
                    converted: row.converted,
                    expected: row.with_margin,
                }
            })
            .collect();

        Self { headers, rows }
    }
}
