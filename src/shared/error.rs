use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no denylisted dependencies were found
    Success = 0,
    /// Denylisted dependencies were detected in the audited file
    IllegalDependenciesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (registry error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IllegalDependenciesDetected => {
                write!(f, "Illegal Dependencies Detected (1)")
            }
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the audit pipeline boundaries.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
/// Per-declaration registry failures never surface here - they are
/// recorded as Unknown findings inside the report instead.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Requirements file not found: {path}\n\n💡 Hint: {suggestion}")]
    RequirementsNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid report name: {name}\nReason: {reason}\n\n💡 Hint: Report names must be plain file names without path separators")]
    InvalidReportName { name: String, reason: String },

    #[error("No report artifact found for \"{name}\"\n\n💡 Hint: Run an audit for this file first")]
    ArtifactNotFound { name: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::IllegalDependenciesDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::IllegalDependenciesDetected),
            "Illegal Dependencies Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_requirements_not_found_display() {
        let error = AuditError::RequirementsNotFound {
            path: PathBuf::from("/test/requirements.txt"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Requirements file not found"));
        assert!(display.contains("/test/requirements.txt"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AuditError::FileWriteError {
            path: PathBuf::from("/test/report.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.csv"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_report_name_display() {
        let error = AuditError::InvalidReportName {
            name: "../escape".to_string(),
            reason: "contains path traversal".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid report name"));
        assert!(display.contains("../escape"));
        assert!(display.contains("contains path traversal"));
    }

    #[test]
    fn test_artifact_not_found_display() {
        let error = AuditError::ArtifactNotFound {
            name: "requirements.txt".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No report artifact found"));
        assert!(display.contains("requirements.txt"));
    }
}
