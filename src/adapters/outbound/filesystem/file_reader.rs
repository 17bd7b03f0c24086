use crate::ports::outbound::RequirementsReader;
use crate::shared::error::AuditError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_UPLOAD_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the RequirementsReader port, providing file
/// system access for reading local requirements files in CLI mode.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;
        validate_file_size(metadata.len(), path, MAX_UPLOAD_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementsReader for FileSystemReader {
    fn read_requirements(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(AuditError::RequirementsNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "File \"{}\" does not exist.\n   \
                     Please pass the path to a requirements-style file with pinned versions.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path, "requirements file").map_err(|e| {
            AuditError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_requirements_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("requirements.txt");
        fs::write(&file_path, "requests==2.31.0\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_requirements(&file_path).unwrap();

        assert_eq!(content, "requests==2.31.0\n");
    }

    #[test]
    fn test_read_requirements_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("requirements.txt");

        let reader = FileSystemReader::new();
        let result = reader.read_requirements(&missing);

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Requirements file not found"));
    }

    #[test]
    fn test_read_requirements_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_requirements(temp_dir.path());

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("not a regular file"));
    }
}
