/// Report formatters - projections of an AuditReport into output formats
mod csv_formatter;
mod json_formatter;
mod summary_formatter;

pub use csv_formatter::CsvReportFormatter;
pub use json_formatter::{JsonReportFormatter, ReportDocument};
pub use summary_formatter::SummaryFormatter;
