use crate::audit::domain::AuditReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Header row of the tabular artifact
const CSV_HEADER: &str = "Dependency,Category";

/// Category label for raw uploaded declarations
const CATEGORY_UPLOADED: &str = "Uploaded";

/// Category label for outdated/unknown findings
const CATEGORY_OUTDATED: &str = "Outdated";

/// Category label for denylisted names
const CATEGORY_ILLEGAL: &str = "Illegal";

/// CsvReportFormatter adapter for the tabular artifact
///
/// Produces a single flat table under the two-column schema
/// `Dependency,Category`, mixing three row shapes: raw declaration lines
/// (`Uploaded`), formatted finding strings (`Outdated`) and bare denylisted
/// names (`Illegal`). Finding strings contain commas, so fields are quoted
/// per RFC 4180 when needed.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it contains a comma, quote or line break.
    /// Embedded quotes are doubled.
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn push_row(output: &mut String, dependency: &str, category: &str) {
        output.push_str(&Self::escape_field(dependency));
        output.push(',');
        output.push_str(&Self::escape_field(category));
        output.push('\n');
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(CSV_HEADER);
        output.push('\n');

        for declaration in report.declarations() {
            Self::push_row(&mut output, &declaration.raw(), CATEGORY_UPLOADED);
        }

        for finding in report.outdated_findings() {
            Self::push_row(&mut output, &finding.to_string(), CATEGORY_OUTDATED);
        }

        for name in report.illegal_names() {
            Self::push_row(&mut output, name, CATEGORY_ILLEGAL);
        }

        Ok(output)
    }
}
