use crate::audit::domain::{AuditReport, DependencyDeclaration, VersionFinding};
use std::collections::BTreeSet;

/// Assembles one immutable report from the pipeline's intermediate results.
///
/// Deterministic: identical inputs always produce identical report content
/// and ordering. Declarations keep input order, findings keep declaration
/// order (up-to-date entries are dropped here), and illegal names arrive
/// pre-sorted from the classifier.
pub struct ReportAggregator;

impl ReportAggregator {
    /// Builds the audit report for one uploaded file
    ///
    /// # Arguments
    /// * `report_name` - The uploaded filename acting as report key
    /// * `declarations` - Parsed declarations in input order
    /// * `findings` - One resolver finding per declaration, same order
    /// * `illegal_names` - Sorted denylist matches
    pub fn assemble(
        report_name: impl Into<String>,
        declarations: Vec<DependencyDeclaration>,
        findings: Vec<VersionFinding>,
        illegal_names: BTreeSet<String>,
    ) -> AuditReport {
        let outdated_findings = findings
            .into_iter()
            .filter(VersionFinding::is_reportable)
            .collect();

        AuditReport::new(
            report_name.into(),
            declarations,
            outdated_findings,
            illegal_names.into_iter().collect(),
        )
    }
}
