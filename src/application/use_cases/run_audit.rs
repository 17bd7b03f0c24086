use crate::application::dto::{AuditRequest, AuditResponse};
use crate::audit::domain::{parse_declarations, VersionFinding, VersionStatus};
use crate::audit::services::{Denylist, ReportAggregator, VersionResolver};
use crate::ports::outbound::{ProgressReporter, VersionRegistry};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// RunAuditUseCase - Core use case for one dependency audit pass
///
/// Orchestrates the linear pipeline: parse the uploaded text, classify
/// declarations against the denylist, resolve each declaration against the
/// registry (bounded fan-out), and assemble the immutable report. All
/// infrastructure dependencies are injected generically.
///
/// # Type Parameters
/// * `REG` - VersionRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct RunAuditUseCase<REG, PR> {
    registry: REG,
    progress_reporter: PR,
    denylist: Denylist,
    resolver: VersionResolver,
}

impl<REG, PR> RunAuditUseCase<REG, PR>
where
    REG: VersionRegistry,
    PR: ProgressReporter,
{
    /// Creates a new RunAuditUseCase with injected dependencies
    pub fn new(registry: REG, progress_reporter: PR, denylist: Denylist) -> Self {
        Self {
            registry,
            progress_reporter,
            denylist,
            resolver: VersionResolver::default(),
        }
    }

    /// Overrides the resolver (lookup concurrency) configuration
    pub fn with_resolver(mut self, resolver: VersionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Executes one audit pass
    ///
    /// # Arguments
    /// * `request` - Audit request carrying the report name and raw text
    ///
    /// # Returns
    /// AuditResponse containing the assembled report. Per-declaration
    /// registry failures are recorded inside the report, never returned as
    /// errors from here.
    pub async fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Parse the uploaded text into declarations
        let declarations = self.parse_and_report(&request);

        // Step 2: Classify against the denylist
        let illegal_names = self.denylist.classify(&declarations);
        if !illegal_names.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} denylisted package(s) declared: {}",
                illegal_names.len(),
                illegal_names
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        // Step 3: Resolve every declaration against the registry
        let findings = self.resolve_with_progress(&declarations).await;

        // Step 4: Assemble the immutable report
        let report = ReportAggregator::assemble(
            request.report_name.clone(),
            declarations,
            findings,
            illegal_names,
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} outdated or unverified, {} illegal",
            report.outdated_findings().len(),
            report.illegal_names().len()
        ));

        Ok(AuditResponse::new(report))
    }

    /// Parses the raw text, reporting declaration and skip counts
    fn parse_and_report(
        &self,
        request: &AuditRequest,
    ) -> Vec<crate::audit::domain::DependencyDeclaration> {
        self.progress_reporter.report(&format!(
            "📖 Parsing dependency declarations from: {}",
            request.report_name
        ));

        let non_empty_lines = request
            .content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count();
        let declarations = parse_declarations(&request.content);

        self.progress_reporter.report(&format!(
            "✅ Detected {} declaration(s)",
            declarations.len()
        ));

        let skipped = non_empty_lines - declarations.len();
        if skipped > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} malformed line(s)",
                skipped
            ));
        }

        declarations
    }

    /// Resolves declarations while driving a progress bar from the
    /// completion callback.
    ///
    /// The bar lives on its own thread and polls atomic counters: the
    /// resolver callback runs inside the async fan-out where the
    /// ProgressReporter port (not Send) cannot be used directly.
    async fn resolve_with_progress(
        &self,
        declarations: &[crate::audit::domain::DependencyDeclaration],
    ) -> Vec<VersionFinding> {
        let total = declarations.len();
        if total == 0 {
            return Vec::new();
        }

        self.progress_reporter
            .report("🔍 Resolving latest versions from the registry...");

        let progress_current = Arc::new(AtomicUsize::new(0));
        let is_done = Arc::new(AtomicBool::new(false));

        let current_clone = progress_current.clone();
        let done_clone = is_done.clone();

        let progress_handle = thread::spawn(move || {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            pb.set_message("Checking registry for latest versions...");

            while !done_clone.load(Ordering::Relaxed) {
                pb.set_position(current_clone.load(Ordering::Relaxed) as u64);
                thread::sleep(Duration::from_millis(50));
            }

            pb.finish_and_clear();
        });

        let callback_counter = progress_current.clone();
        let callback = move |done: usize, _total: usize| {
            callback_counter.store(done, Ordering::Relaxed);
        };

        let findings = self
            .resolver
            .resolve(&self.registry, declarations, Some(&callback))
            .await;

        is_done.store(true, Ordering::Relaxed);
        let _ = progress_handle.join();
        eprintln!(); // Add newline after progress bar

        let unknown = findings
            .iter()
            .filter(|finding| finding.status() == VersionStatus::Unknown)
            .count();
        if unknown > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} package(s) could not be verified against the registry",
                unknown
            ));
        }

        findings
    }
}
