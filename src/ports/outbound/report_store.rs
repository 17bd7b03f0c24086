use crate::audit::domain::AuditReport;
use crate::shared::Result;

/// The two durable artifact projections kept per report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Tabular artifact: `<name>.csv`
    Csv,
    /// Structured-document artifact: `<name>.json`
    Json,
}

impl ArtifactKind {
    /// File name of the artifact for a given report name
    pub fn file_name(&self, report_name: &str) -> String {
        match self {
            ArtifactKind::Csv => format!("{}.csv", report_name),
            ArtifactKind::Json => format!("{}.json", report_name),
        }
    }

    /// MIME content type served for downloads of this artifact
    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Csv => "text/csv; charset=utf-8",
            ArtifactKind::Json => "application/json; charset=utf-8",
        }
    }
}

/// ReportStore port for durable report artifacts
///
/// This port abstracts the storage that keeps report artifacts referable
/// by their report name across process restarts. Re-persisting a report
/// under the same name silently replaces the prior artifacts.
pub trait ReportStore: Send + Sync {
    /// Persists the raw uploaded source text under the report name
    ///
    /// # Errors
    /// Returns an error if the storage location is not writable
    fn persist_source(&self, report_name: &str, content: &str) -> Result<()>;

    /// Persists both artifact projections of the report
    ///
    /// Both artifacts are written from the same report record, after all
    /// findings have been collected; partial reports are never persisted.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails
    fn persist(&self, report: &AuditReport) -> Result<()>;

    /// Loads the bytes of a previously persisted artifact
    ///
    /// # Returns
    /// `None` if no artifact of this kind exists for the report name
    /// (the not-found condition for download endpoints)
    fn load(&self, report_name: &str, kind: ArtifactKind) -> Result<Option<Vec<u8>>>;
}
