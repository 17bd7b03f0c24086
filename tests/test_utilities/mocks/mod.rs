mod mock_progress_reporter;
mod mock_version_registry;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_version_registry::MockVersionRegistry;
