use crate::adapters::outbound::formatters::{CsvReportFormatter, JsonReportFormatter};
use crate::audit::domain::AuditReport;
use crate::ports::outbound::{ArtifactKind, ReportFormatter, ReportStore};
use crate::shared::error::AuditError;
use crate::shared::security::validate_report_name;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReportStore adapter for durable report artifacts
///
/// Keeps, per report name, the raw uploaded source plus the CSV and JSON
/// projections under one storage directory. Re-persisting a name silently
/// replaces the existing files; artifacts survive process restarts and are
/// referable by report name (the download contract).
pub struct FileSystemReportStore {
    root: PathBuf,
    csv_formatter: CsvReportFormatter,
    json_formatter: JsonReportFormatter,
}

impl FileSystemReportStore {
    /// Opens (and creates if needed) a store rooted at `root`
    ///
    /// # Errors
    /// Returns an error if the storage directory cannot be created
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| AuditError::FileWriteError {
            path: root.clone(),
            details: format!("Failed to create storage directory: {}", e),
        })?;

        Ok(Self {
            root,
            csv_formatter: CsvReportFormatter::new(),
            json_formatter: JsonReportFormatter::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_path(&self, report_name: &str, kind: ArtifactKind) -> Result<PathBuf> {
        validate_report_name(report_name)?;
        Ok(self.root.join(kind.file_name(report_name)))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        // Never follow a symlink planted at an artifact path
        if path.exists() {
            let metadata = fs::symlink_metadata(path).map_err(|e| AuditError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to read file metadata: {}", e),
            })?;
            if metadata.is_symlink() {
                return Err(AuditError::FileWriteError {
                    path: path.to_path_buf(),
                    details: "Security: artifact path is a symbolic link".to_string(),
                }
                .into());
            }
        }

        fs::write(path, content).map_err(|e| {
            AuditError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ReportStore for FileSystemReportStore {
    fn persist_source(&self, report_name: &str, content: &str) -> Result<()> {
        validate_report_name(report_name)?;
        let path = self.root.join(report_name);
        self.write_file(&path, content.as_bytes())
    }

    fn persist(&self, report: &AuditReport) -> Result<()> {
        let csv = self.csv_formatter.format(report)?;
        let json = self.json_formatter.format(report)?;

        // Both artifacts derive from the same assembled report; writing
        // happens only after all findings are collected.
        let csv_path = self.artifact_path(report.report_name(), ArtifactKind::Csv)?;
        self.write_file(&csv_path, csv.as_bytes())?;

        let json_path = self.artifact_path(report.report_name(), ArtifactKind::Json)?;
        self.write_file(&json_path, json.as_bytes())?;

        Ok(())
    }

    fn load(&self, report_name: &str, kind: ArtifactKind) -> Result<Option<Vec<u8>>> {
        let path = self.artifact_path(report_name, kind)?;
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| AuditError::FileReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(Some(bytes))
    }
}
