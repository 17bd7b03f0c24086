use crate::shared::Result;
use std::path::Path;

/// RequirementsReader port for reading requirements file contents
///
/// This port abstracts the file system operations needed to read an
/// uploaded or local requirements-style file. The audit core never opens
/// files itself - it is handed the raw text and a report name.
pub trait RequirementsReader {
    /// Reads the requirements file at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the requirements file
    ///
    /// # Returns
    /// The raw content of the file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_requirements(&self, path: &Path) -> Result<String>;
}
