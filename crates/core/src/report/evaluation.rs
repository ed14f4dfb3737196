//! One full evaluation pass: validate, compute, summarize, tabulate.

use serde::Serialize;

use super::error::ExportError;
use super::export::{CsvExport, export_csv};
use super::summary::{Summary, summarize};
use super::table::BreakdownTable;
use crate::expense::{CostBreakdown, ExpenseInput, InputError, benchmark_total, compute};
use crate::settings::CalculatorSettings;

/// Everything shown for one set of inputs.
///
/// Rebuilt from scratch whenever any input changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Calculated amounts.
    pub breakdown: CostBreakdown,
    /// Converted total at the fixed benchmark margin.
    pub benchmark: rust_decimal::Decimal,
    /// Result sentences.
    pub summary: Summary,
    /// Breakdown table.
    pub table: BreakdownTable,
}

impl Evaluation {
    /// Serializes the table for download.
    pub fn export(&self, settings: &CalculatorSettings) -> Result<CsvExport, ExportError> {
        export_csv(&self.table, &settings.export_filename)
    }
}

/// Runs the evaluation pass for an input.
pub fn evaluate(
    settings: &CalculatorSettings,
    input: &ExpenseInput,
) -> Result<Evaluation, InputError> {
    input.validate()?;

    let breakdown = compute(input, &settings.rates);
    let benchmark = benchmark_total(&breakdown, settings.benchmark_margin_percent);
    let summary = summarize(&breakdown, settings.currencies, settings.benchmark_margin_percent);
    let table = BreakdownTable::new(&breakdown, settings.currencies);

    Ok(Evaluation {
        breakdown,
        benchmark,
        summary,
        table,
    })
}
