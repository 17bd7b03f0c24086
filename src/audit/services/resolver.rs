use crate::audit::domain::{DependencyDeclaration, ReleaseVersion, VersionFinding};
use crate::ports::outbound::{LookupError, VersionRegistry};
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of registry lookups in flight at once
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Callback invoked after each completed lookup with (completed, total)
pub type ProgressCallback<'a> = &'a (dyn Fn(usize, usize) + Send + Sync);

/// Resolves declarations against a version registry and classifies each.
///
/// Lookups are independent network round-trips, so they run through a
/// bounded `buffer_unordered` pool; the results are re-sorted to
/// declaration order before they are returned, keeping the pipeline
/// deterministic regardless of completion order. One declaration's failure
/// never aborts the others - every failure mode lands in an Unknown
/// finding.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    max_concurrency: usize,
}

impl VersionResolver {
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            // A zero bound would stall the stream forever
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Resolves every declaration, producing exactly one finding per
    /// declaration in declaration order.
    ///
    /// # Arguments
    /// * `registry` - The version registry to query
    /// * `declarations` - Declarations to resolve
    /// * `progress` - Optional callback fired after each completed lookup
    pub fn resolve<'a, R: VersionRegistry>(
        &'a self,
        registry: &'a R,
        declarations: &'a [DependencyDeclaration],
        progress: Option<ProgressCallback<'a>>,
    ) -> impl std::future::Future<Output = Vec<VersionFinding>> + Send + 'a {
        // The explicit `+ Send + 'a` return type makes `'a` early-bound. As an
        // `async fn`, the input lifetimes would be late-bound, and the Send
        // auto-trait check across the fan-out's `.await` then fails at the
        // axum handler boundary ("implementation of Send is not general
        // enough" / "FnOnce is not general enough"). Desugaring by hand with
        // an early-bound `'a` — plus building the per-lookup futures through a
        // plain `Iterator::map` instead of `StreamExt::map` — keeps the
        // resulting future `Send`.
        async move {
            let total = declarations.len();
            // Owned (Arc) rather than a stack borrow so each per-lookup future
            // can be boxed with the `'a` lifetime below without borrowing a
            // local.
            let completed = std::sync::Arc::new(AtomicUsize::new(0));

            type Lookup<'f> =
                std::pin::Pin<Box<dyn std::future::Future<Output = (usize, VersionFinding)> + Send + 'f>>;

            let lookups: Vec<Lookup<'a>> = declarations
                .iter()
                .enumerate()
                .map(|(index, declaration)| {
                    let completed = completed.clone();
                    Box::pin(async move {
                        let finding = Self::resolve_one(registry, declaration).await;
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        if let Some(callback) = progress {
                            callback(done, total);
                        }
                        (index, finding)
                    }) as Lookup<'a>
                })
                .collect();

            let mut indexed: Vec<(usize, VersionFinding)> = stream::iter(lookups)
                .buffer_unordered(self.max_concurrency)
                .collect()
                .await;

            // Completion order is nondeterministic; declaration order is the contract
            indexed.sort_by_key(|(index, _)| *index);
            indexed.into_iter().map(|(_, finding)| finding).collect()
        }
    }

    /// Resolves a single declaration. Never fails - every lookup or parse
    /// problem is folded into the finding.
    async fn resolve_one<R: VersionRegistry>(
        registry: &R,
        declaration: &DependencyDeclaration,
    ) -> VersionFinding {
        let name = declaration.name();
        let declared = declaration.declared_version();

        match registry.latest_version(name).await {
            Ok(latest) => Self::classify(name, declared, &latest),
            Err(LookupError::BadStatus(_)) => VersionFinding::unreachable(name, declared),
            Err(error) => VersionFinding::unknown(name, declared, error.to_string()),
        }
    }

    /// Applies the classification policy once the registry has answered.
    fn classify(name: &str, declared_raw: &str, latest_raw: &str) -> VersionFinding {
        let declared = match ReleaseVersion::parse(declared_raw) {
            Ok(version) => version,
            Err(error) => {
                return VersionFinding::unknown(
                    name,
                    declared_raw,
                    format!("invalid installed version: {}", error),
                )
            }
        };

        let latest = match ReleaseVersion::parse(latest_raw) {
            Ok(version) => version,
            Err(error) => {
                return VersionFinding::unknown(
                    name,
                    declared_raw,
                    format!("invalid latest version: {}", error),
                )
            }
        };

        if declared < latest {
            VersionFinding::outdated(name, declared_raw, latest_raw)
        } else {
            VersionFinding::up_to_date(name, declared_raw, latest_raw)
        }
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT_LOOKUPS)
    }
}
