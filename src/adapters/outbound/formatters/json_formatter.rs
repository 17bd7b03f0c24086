use crate::audit::domain::AuditReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Wire shape of the structured-document artifact.
///
/// Dependencies are raw `name==version` lines, outdated entries are the
/// formatted finding strings and illegal entries are bare names - the same
/// strings that appear in the tabular artifact, so the two artifacts stay
/// projections of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub filename: String,
    pub dependencies: Vec<String>,
    pub outdated_libs: Vec<String>,
    pub illegal_libs: Vec<String>,
}

impl From<&AuditReport> for ReportDocument {
    fn from(report: &AuditReport) -> Self {
        Self {
            filename: report.report_name().to_string(),
            dependencies: report
                .declarations()
                .iter()
                .map(|declaration| declaration.raw())
                .collect(),
            outdated_libs: report
                .outdated_findings()
                .iter()
                .map(|finding| finding.to_string())
                .collect(),
            illegal_libs: report.illegal_names().to_vec(),
        }
    }
}

/// JsonReportFormatter adapter for the structured-document artifact
///
/// Serializes the full report record as pretty-printed UTF-8 JSON. The
/// output is deterministic for identical reports (field order is fixed by
/// the struct definition).
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let document = ReportDocument::from(report);
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
