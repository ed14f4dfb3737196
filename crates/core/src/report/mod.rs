//! Presentation of a breakdown: display formatting, summary sentences,
//! the breakdown table and its CSV export.

pub mod error;
pub mod evaluation;
pub mod export;
pub mod format;
pub mod summary;
pub mod table;

pub use error::ExportError;
pub use evaluation::{Evaluation, evaluate};
pub use export::{CSV_CONTENT_TYPE, CsvExport, export_csv};
pub use format::{format_amount, format_rate};
pub use summary::{Segment, Sentence, Summary, summarize};
pub use table::{BreakdownTable, TableRow};
