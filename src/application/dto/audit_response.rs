use crate::audit::domain::AuditReport;

/// AuditResponse - Internal response DTO from the audit use case
///
/// Carries the assembled report; adapters project it into the CSV, JSON
/// and summary formats and the report store persists it.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    /// The assembled, immutable audit report
    pub report: AuditReport,
}

impl AuditResponse {
    pub fn new(report: AuditReport) -> Self {
        Self { report }
    }
}
