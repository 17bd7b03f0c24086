use crate::ports::outbound::{LookupError, VersionRegistry};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default registry endpoint (JSON API)
const DEFAULT_BASE_URL: &str = "https://pypi.org/pypi";

/// Per-lookup timeout; a hung registry call must not block unrelated lookups
const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct PackageDocument {
    info: PackageInfo,
}

#[derive(Debug, Deserialize)]
struct PackageInfo {
    version: String,
}

/// PyPiRegistry adapter for resolving latest versions from the PyPI JSON API
///
/// This adapter implements the VersionRegistry port with async network
/// access to `GET <base_url>/{name}/json`. Each lookup is a single attempt
/// bounded by its own timeout; every failure mode maps to a typed
/// `LookupError` so the resolver can record it as data instead of
/// propagating it.
pub struct PyPiRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl PyPiRegistry {
    /// Creates a registry client against the public PyPI endpoint
    pub fn new() -> Result<Self> {
        Self::with_settings(DEFAULT_BASE_URL, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Creates a registry client with a custom endpoint and timeout
    ///
    /// # Arguments
    /// * `base_url` - Registry base URL without a trailing slash
    /// * `timeout` - Per-lookup timeout applied to every request
    pub fn with_settings(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("req-audit/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Validates a package name before it is embedded in a URL
    ///
    /// # Security
    /// Prevents URL injection: path separators, parent references and
    /// URL-structural characters are rejected before encoding.
    fn validate_package_name(name: &str) -> std::result::Result<(), LookupError> {
        if name.is_empty() {
            return Err(LookupError::InvalidPackageName(
                "name is empty".to_string(),
            ));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(LookupError::InvalidPackageName(
                "name contains path separators".to_string(),
            ));
        }

        if name.contains("..") {
            return Err(LookupError::InvalidPackageName(
                "name contains '..'".to_string(),
            ));
        }

        if name.contains('#') || name.contains('?') || name.contains('@') {
            return Err(LookupError::InvalidPackageName(
                "name contains URL-unsafe characters".to_string(),
            ));
        }

        Ok(())
    }

    fn lookup_url(&self, package_name: &str) -> String {
        let encoded = urlencoding::encode(package_name);
        format!("{}/{}/json", self.base_url, encoded)
    }
}

// Note: no Default implementation - client creation can fail and callers
// must handle the Result from new() explicitly.

#[async_trait]
impl VersionRegistry for PyPiRegistry {
    async fn latest_version(&self, package_name: &str) -> std::result::Result<String, LookupError> {
        Self::validate_package_name(package_name)?;

        let url = self.lookup_url(package_name);
        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Unreachable(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(LookupError::BadStatus(response.status().as_u16()));
        }

        let document: PackageDocument = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::MalformedResponse(e.to_string())
            }
        })?;

        Ok(document.info.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = PyPiRegistry::new();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_lookup_url_shape() {
        let registry = PyPiRegistry::new().unwrap();
        assert_eq!(
            registry.lookup_url("requests"),
            "https://pypi.org/pypi/requests/json"
        );
    }

    #[test]
    fn test_lookup_url_encodes_special_characters() {
        let registry =
            PyPiRegistry::with_settings("http://localhost:9999", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        assert_eq!(
            registry.lookup_url("name with space"),
            "http://localhost:9999/name%20with%20space/json"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let registry =
            PyPiRegistry::with_settings("http://localhost:9999/", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        assert_eq!(
            registry.lookup_url("requests"),
            "http://localhost:9999/requests/json"
        );
    }

    #[test]
    fn test_validate_package_name_plain() {
        assert!(PyPiRegistry::validate_package_name("requests").is_ok());
        assert!(PyPiRegistry::validate_package_name("typing_extensions").is_ok());
    }

    #[test]
    fn test_validate_package_name_rejects_separators() {
        assert!(matches!(
            PyPiRegistry::validate_package_name("a/b"),
            Err(LookupError::InvalidPackageName(_))
        ));
        assert!(matches!(
            PyPiRegistry::validate_package_name("a\\b"),
            Err(LookupError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn test_validate_package_name_rejects_traversal() {
        assert!(matches!(
            PyPiRegistry::validate_package_name(".."),
            Err(LookupError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn test_validate_package_name_rejects_url_characters() {
        for name in ["a#b", "a?b", "a@b"] {
            assert!(matches!(
                PyPiRegistry::validate_package_name(name),
                Err(LookupError::InvalidPackageName(_))
            ));
        }
    }

    #[test]
    fn test_validate_package_name_rejects_empty() {
        assert!(matches!(
            PyPiRegistry::validate_package_name(""),
            Err(LookupError::InvalidPackageName(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_name_fails_without_network() {
        let registry =
            PyPiRegistry::with_settings("http://localhost:9999", DEFAULT_LOOKUP_TIMEOUT).unwrap();
        let result = registry.latest_version("../../etc").await;
        assert!(matches!(result, Err(LookupError::InvalidPackageName(_))));
    }

    // Integration tests - require network access
    // Uncomment to run against the real PyPI API
    // #[tokio::test]
    // async fn test_latest_version_real() {
    //     let registry = PyPiRegistry::new().unwrap();
    //     assert!(registry.latest_version("requests").await.is_ok());
    // }
}
