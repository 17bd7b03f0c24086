use serde::Serialize;

/// The resolver's verdict for one declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionStatus {
    /// Declared version is at or above the registry's latest
    UpToDate,
    /// A newer version is published on the registry
    Outdated,
    /// The registry could not answer, or a version did not parse
    Unknown,
}

/// One resolver result for one declaration.
///
/// Exactly one finding exists per declaration; the aggregator later drops
/// the UpToDate ones from the report. `latest_version` is present whenever
/// the registry answered with a parseable version; `reason` is present for
/// Unknown findings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionFinding {
    name: String,
    declared_version: String,
    latest_version: Option<String>,
    status: VersionStatus,
    reason: Option<String>,
}

impl VersionFinding {
    pub fn up_to_date(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            latest_version: Some(latest_version.into()),
            status: VersionStatus::UpToDate,
            reason: None,
        }
    }

    pub fn outdated(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            latest_version: Some(latest_version.into()),
            status: VersionStatus::Outdated,
            reason: None,
        }
    }

    /// Unknown outcome for a registry that answered with a non-success
    /// status. The reason text is fixed so the report stays stable across
    /// registries and status codes.
    pub fn unreachable(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            latest_version: None,
            status: VersionStatus::Unknown,
            reason: Some("could not fetch latest version".to_string()),
        }
    }

    /// Unknown outcome carrying the underlying error text (network failure,
    /// timeout, or an unparseable version on either side).
    pub fn unknown(
        name: impl Into<String>,
        declared_version: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
            latest_version: None,
            status: VersionStatus::Unknown,
            reason: Some(reason.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_version(&self) -> &str {
        &self.declared_version
    }

    pub fn latest_version(&self) -> Option<&str> {
        self.latest_version.as_deref()
    }

    pub fn status(&self) -> VersionStatus {
        self.status
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Whether this finding is retained in the audit report.
    /// Up-to-date dependencies are excluded from the report entirely.
    pub fn is_reportable(&self) -> bool {
        !matches!(self.status, VersionStatus::UpToDate)
    }
}

impl std::fmt::Display for VersionFinding {
    /// Renders the finding in the report wire format. These exact shapes
    /// appear in both the CSV rows and the JSON `outdated_libs` array.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            VersionStatus::Outdated | VersionStatus::UpToDate => write!(
                f,
                "{}: Installed ({}), Latest ({})",
                self.name,
                self.declared_version,
                self.latest_version.as_deref().unwrap_or("?")
            ),
            VersionStatus::Unknown => match self.reason.as_deref() {
                Some("could not fetch latest version") => {
                    write!(f, "{}: Could not fetch latest version.", self.name)
                }
                Some(reason) => {
                    write!(f, "{}: Unable to check version ({})", self.name, reason)
                }
                None => write!(f, "{}: Unable to check version", self.name),
            },
        }
    }
}
