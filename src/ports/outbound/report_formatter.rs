use crate::audit::domain::AuditReport;
use crate::shared::Result;

/// ReportFormatter port for projecting an audit report into an output format
///
/// This port abstracts the formatting logic for the different report
/// projections (CSV table, JSON document, rendered summary). All
/// projections derive from the same `AuditReport`, so the artifacts stay
/// logically consistent with each other.
pub trait ReportFormatter {
    /// Formats the audit report
    ///
    /// # Arguments
    /// * `report` - The assembled audit report
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &AuditReport) -> Result<String>;
}
