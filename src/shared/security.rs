use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum upload size (10 MB)
/// This prevents DoS attacks via excessively large files
pub const MAX_UPLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Validates a report name before it is used to build storage paths.
///
/// # Security
/// The uploaded filename is the report key (see DESIGN.md), so it ends up
/// embedded in filesystem paths. Names containing path separators or parent
/// references could escape the storage directory.
///
/// # Errors
/// Returns an error if the name is empty, contains path separators,
/// contains `..`, or starts with a dot.
pub fn validate_report_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AuditError::InvalidReportName {
            name: name.to_string(),
            reason: "name is empty".to_string(),
        }
        .into());
    }

    if name.contains('/') || name.contains('\\') {
        return Err(AuditError::InvalidReportName {
            name: name.to_string(),
            reason: "name contains path separators".to_string(),
        }
        .into());
    }

    if name.contains("..") {
        return Err(AuditError::InvalidReportName {
            name: name.to_string(),
            reason: "name contains parent directory references".to_string(),
        }
        .into());
    }

    if name.starts_with('.') {
        return Err(AuditError::InvalidReportName {
            name: name.to_string(),
            reason: "hidden file names are not allowed".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// This combines existence check, symlink check, and file type check in one
/// operation. Uses `symlink_metadata()` instead of `metadata()` to check the
/// symlink itself, not the target it points to.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
