use crate::audit::domain::AuditReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for uploaded declarations
const TABLE_HEADER: &str = "| Dependency | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------------|---------|\n";

/// SummaryFormatter adapter for the rendered summary view
///
/// Produces the human-readable projection of an audit report (the view a
/// browser or terminal shows after an upload). This is presentation only -
/// the durable artifacts are the CSV and JSON projections.
pub struct SummaryFormatter;

impl SummaryFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(output: &mut String, report: &AuditReport) {
        output.push_str("# Dependency Audit Report\n\n");
        output.push_str(&format!("Source file: `{}`\n", report.report_name()));
        output.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }

    fn render_declarations(output: &mut String, report: &AuditReport) {
        output.push_str(&format!(
            "## Uploaded Dependencies ({})\n\n",
            report.declarations().len()
        ));

        if report.declarations().is_empty() {
            output.push_str("*No parseable dependency declarations found*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for declaration in report.declarations() {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_table_cell(declaration.name()),
                Self::escape_table_cell(declaration.declared_version())
            ));
        }
        output.push('\n');
    }

    fn render_findings(output: &mut String, report: &AuditReport) {
        output.push_str(&format!(
            "## Outdated or Unverified ({})\n\n",
            report.outdated_findings().len()
        ));

        if report.outdated_findings().is_empty() {
            output.push_str("*All resolvable dependencies are up to date*\n\n");
            return;
        }

        for finding in report.outdated_findings() {
            output.push_str(&format!("- {}\n", finding));
        }
        output.push('\n');
    }

    fn render_illegal(output: &mut String, report: &AuditReport) {
        output.push_str(&format!(
            "## Illegal Dependencies ({})\n\n",
            report.illegal_names().len()
        ));

        if report.illegal_names().is_empty() {
            output.push_str("✅ No denylisted dependencies found\n");
            return;
        }

        for name in report.illegal_names() {
            output.push_str(&format!("- ⛔ {}\n", name));
        }
        output.push('\n');
        output.push_str(&format!(
            "❌ {} denylisted dependenc{} must be removed\n",
            report.illegal_names().len(),
            if report.illegal_names().len() == 1 {
                "y"
            } else {
                "ies"
            }
        ));
    }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for SummaryFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, report);
        Self::render_declarations(&mut output, report);
        Self::render_findings(&mut output, report);
        Self::render_illegal(&mut output, report);
        Ok(output)
    }
}
