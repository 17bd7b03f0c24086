use async_trait::async_trait;
use thiserror::Error;

/// Typed failure for one registry lookup.
///
/// Lookup failures are data, not control flow: the resolver turns every
/// variant into an Unknown finding and continues with the remaining
/// declarations.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The registry answered with a non-success HTTP status
    #[error("registry returned status code {0}")]
    BadStatus(u16),

    /// The per-call timeout expired before a response arrived
    #[error("request timed out")]
    Timeout,

    /// Connection-level failure (DNS, refused, reset, ...)
    #[error("registry unreachable: {0}")]
    Unreachable(String),

    /// The response body did not contain a usable version field
    #[error("malformed registry response: {0}")]
    MalformedResponse(String),

    /// The package name cannot be turned into a safe registry URL
    #[error("invalid package name: {0}")]
    InvalidPackageName(String),
}

/// VersionRegistry port for resolving the latest published version
///
/// This port abstracts the external package registry (e.g. the PyPI JSON
/// API) behind a single contract: given a package name, return the latest
/// version string or a typed failure.
///
/// # Async Support
/// Lookups are async so the resolver can fan them out through a bounded
/// worker pool. Implementations must be `Send + Sync` to support
/// concurrent access.
#[async_trait]
pub trait VersionRegistry: Send + Sync {
    /// Resolves the latest published version for a package name
    ///
    /// # Arguments
    /// * `package_name` - Name of the package to look up
    ///
    /// # Returns
    /// The latest version string as published by the registry
    ///
    /// # Errors
    /// Returns a `LookupError` describing why the lookup failed. A single
    /// attempt is made per call; retrying is the caller's decision (the
    /// audit pipeline deliberately does not retry).
    async fn latest_version(&self, package_name: &str) -> Result<String, LookupError>;
}

/// Shared registries (e.g. one client behind HTTP handlers) delegate
/// through the Arc.
#[async_trait]
impl<T: VersionRegistry + ?Sized> VersionRegistry for std::sync::Arc<T> {
    async fn latest_version(&self, package_name: &str) -> Result<String, LookupError> {
        (**self).latest_version(package_name).await
    }
}
