//! CSV export of the breakdown table.

use csv::Writer;
use serde::Serialize;

use super::error::ExportError;
use super::table::BreakdownTable;

/// Content type of the exported file.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Downloadable CSV artifact. Built on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvExport {
    /// Filename offered to the browser.
    pub filename: String,
    /// MIME type of `body`.
    pub content_type: &'static str,
    /// UTF-8 CSV text: a header row and four data rows.
    pub body: String,
}

/// Serializes the table to CSV.
///
/// Amounts are written unrounded, without separators, so the file
/// reproduces the calculation exactly.
pub fn export_csv(table: &BreakdownTable, filename: &str) -> Result<CsvExport, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record([
            row.label.to_string(),
            row.base.normalize().to_string(),
            row.converted.normalize().to_string(),
            row.expected.normalize().to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))?;

    Ok(CsvExport {
        filename: filename.to_string(),
        content_type: CSV_CONTENT_TYPE,
        body: String::from_utf8(bytes)?,
    })
}
