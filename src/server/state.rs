use crate::adapters::outbound::console::PlainProgressReporter;
use crate::adapters::outbound::filesystem::FileSystemReportStore;
use crate::adapters::outbound::formatters::ReportDocument;
use crate::adapters::outbound::network::PyPiRegistry;
use crate::application::dto::AuditRequest;
use crate::application::use_cases::RunAuditUseCase;
use crate::audit::services::{Denylist, VersionResolver};
use crate::config::AppConfig;
use crate::ports::outbound::{ArtifactKind, ReportStore};
use crate::shared::security::validate_report_name;
use crate::shared::Result;
use std::sync::Arc;
use std::time::Instant;

/// Shared server state: one registry client and one report store for all
/// requests. There is no cross-request state beyond the storage directory -
/// each upload is a single stateless pipeline pass.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<PyPiRegistry>,
    store: Arc<FileSystemReportStore>,
    denylist: Denylist,
    resolver: VersionResolver,
    started_at: Instant,
}

impl AppState {
    /// Builds server state from resolved configuration
    ///
    /// # Errors
    /// Returns an error if the registry client cannot be constructed or the
    /// storage directory cannot be created
    pub fn new(config: &AppConfig) -> Result<Self> {
        let registry = PyPiRegistry::with_settings(&config.registry_url, config.lookup_timeout)?;
        let store = FileSystemReportStore::new(&config.storage_dir)?;
        let denylist = match &config.denylist {
            Some(names) => Denylist::from_names(names.clone()),
            None => Denylist::default(),
        };

        Ok(Self {
            registry: Arc::new(registry),
            store: Arc::new(store),
            denylist,
            resolver: VersionResolver::new(config.max_concurrent_lookups),
            started_at: Instant::now(),
        })
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Loads a persisted artifact, `None` when absent
    pub fn load_artifact(&self, report_name: &str, kind: ArtifactKind) -> Result<Option<Vec<u8>>> {
        self.store.load(report_name, kind)
    }

    /// Runs the full pipeline for one upload and persists everything.
    ///
    /// Validates the report name, stores the raw source, executes the
    /// audit use case, persists both artifacts and returns the report
    /// document for the response body.
    pub async fn run_audit(&self, report_name: &str, content: &str) -> Result<ReportDocument> {
        validate_report_name(report_name)?;
        self.store.persist_source(report_name, content)?;

        let use_case = RunAuditUseCase::new(
            self.registry.clone(),
            PlainProgressReporter,
            self.denylist.clone(),
        )
        .with_resolver(self.resolver.clone());

        let response = use_case
            .execute(AuditRequest::new(report_name, content))
            .await?;

        self.store.persist(&response.report)?;
        Ok(ReportDocument::from(&response.report))
    }
}
