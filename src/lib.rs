//! req-audit - Dependency audit service for requirements files
//!
//! This library parses requirements-style dependency declarations, flags
//! denylisted package names, resolves each pinned version against a package
//! registry, and persists the resulting report as a CSV table and a JSON
//! document, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Server** (`server`): Thin HTTP delivery shell over the use case
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use req_audit::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let registry = PyPiRegistry::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunAuditUseCase::new(registry, progress_reporter, Denylist::default());
//!
//! // Execute
//! let request = AuditRequest::new("requirements.txt", "requests==2.0.0\n");
//! let response = use_case.execute(request).await?;
//!
//! // Persist both artifacts
//! let store = FileSystemReportStore::new("uploads")?;
//! store.persist(&response.report)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod config;
pub mod ports;
pub mod server;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{PlainProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemReportStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvReportFormatter, JsonReportFormatter, ReportDocument, SummaryFormatter,
    };
    pub use crate::adapters::outbound::network::PyPiRegistry;
    pub use crate::application::dto::{AuditRequest, AuditResponse};
    pub use crate::application::factories::{FormatterFactory, FormatterType};
    pub use crate::application::use_cases::RunAuditUseCase;
    pub use crate::audit::domain::{
        parse_declarations, AuditReport, DependencyDeclaration, ReleaseVersion, VersionFinding,
        VersionStatus,
    };
    pub use crate::audit::services::{Denylist, ReportAggregator, VersionResolver};
    pub use crate::ports::outbound::{
        ArtifactKind, LookupError, OutputPresenter, ProgressReporter, ReportFormatter,
        ReportStore, RequirementsReader, VersionRegistry,
    };
    pub use crate::shared::Result;
}
