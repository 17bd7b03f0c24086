/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_store;
pub mod requirements_reader;
pub mod version_registry;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_store::{ArtifactKind, ReportStore};
pub use requirements_reader::RequirementsReader;
pub use version_registry::{LookupError, VersionRegistry};
