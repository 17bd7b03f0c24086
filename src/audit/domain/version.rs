use std::cmp::Ordering;
use thiserror::Error;

/// Maximum length for version strings (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Error raised when a version string cannot be interpreted.
///
/// At the pipeline level this never aborts anything - an unparseable
/// version on either side of a comparison turns the whole lookup into an
/// Unknown finding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,

    #[error("version string is too long ({0} bytes)")]
    TooLong(usize),

    #[error("invalid release component \"{0}\"")]
    InvalidReleaseComponent(String),

    #[error("empty pre-release identifier")]
    EmptyPreReleaseIdentifier,
}

/// One dot-separated identifier in a pre-release section.
///
/// Numeric identifiers compare numerically, alphanumeric ones lexically,
/// and any numeric identifier ranks below any alphanumeric one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Identifier {
    Numeric(u64),
    Alpha(String),
}

impl Identifier {
    fn parse(raw: &str) -> Result<Self, VersionParseError> {
        if raw.is_empty() {
            return Err(VersionParseError::EmptyPreReleaseIdentifier);
        }
        match raw.parse::<u64>() {
            Ok(n) => Ok(Identifier::Numeric(n)),
            Err(_) => Ok(Identifier::Alpha(raw.to_string())),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Alpha(a), Identifier::Alpha(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alpha(_)) => Ordering::Less,
            (Identifier::Alpha(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A published release version, ordered by semantic-versioning precedence.
///
/// The release section is lenient about component count (registries publish
/// versions like `4.2` as well as `4.2.0`); missing components compare as
/// zero. Precedence itself is strict: release components compare
/// numerically, a pre-release ranks below the corresponding release, and
/// build metadata (after `+`) is parsed but carries no precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    release: Vec<u64>,
    pre_release: Vec<Identifier>,
}

impl ReleaseVersion {
    /// Parses a version string.
    ///
    /// Accepted shape: `N(.N)*` release components, an optional
    /// `-identifiers` pre-release section, and an optional `+metadata`
    /// trailer which is discarded.
    ///
    /// # Errors
    /// Returns a `VersionParseError` for empty input, oversized input, or
    /// non-numeric release components.
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }
        if trimmed.len() > MAX_VERSION_LENGTH {
            return Err(VersionParseError::TooLong(trimmed.len()));
        }

        // Build metadata never participates in precedence
        let without_build = match trimmed.split_once('+') {
            Some((head, _metadata)) => head,
            None => trimmed,
        };

        let (release_part, pre_part) = match without_build.split_once('-') {
            Some((release, pre)) => (release, Some(pre)),
            None => (without_build, None),
        };

        let release = release_part
            .split('.')
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|_| VersionParseError::InvalidReleaseComponent(component.to_string()))
            })
            .collect::<Result<Vec<u64>, VersionParseError>>()?;

        let pre_release = match pre_part {
            Some(pre) => pre
                .split('.')
                .map(Identifier::parse)
                .collect::<Result<Vec<Identifier>, VersionParseError>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            release,
            pre_release,
        })
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    fn compare_release(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        for i in 0..len {
            let a = self.release.get(i).copied().unwrap_or(0);
            let b = other.release.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }

    fn compare_pre_release(&self, other: &Self) -> Ordering {
        // A pre-release always ranks below the plain release
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (a, b) in self.pre_release.iter().zip(other.pre_release.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }

        // Identical prefix: the longer identifier list ranks higher
        self.pre_release.len().cmp(&other.pre_release.len())
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_release(other)
            .then_with(|| self.compare_pre_release(other))
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: &str) -> ReleaseVersion {
        ReleaseVersion::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_three_components() {
        let version = v("1.2.3");
        assert!(!version.is_pre_release());
    }

    #[test]
    fn test_parse_short_release() {
        // Registries publish two-component versions routinely
        assert!(ReleaseVersion::parse("4.2").is_ok());
        assert!(ReleaseVersion::parse("7").is_ok());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ReleaseVersion::parse(""), Err(VersionParseError::Empty));
        assert_eq!(ReleaseVersion::parse("  "), Err(VersionParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ReleaseVersion::parse("not-a-version"),
            Err(VersionParseError::InvalidReleaseComponent(_))
        ));
        assert!(matches!(
            ReleaseVersion::parse("1..2"),
            Err(VersionParseError::InvalidReleaseComponent(_))
        ));
    }

    #[test]
    fn test_parse_rejects_oversized() {
        let huge = "1".repeat(MAX_VERSION_LENGTH + 1);
        assert!(matches!(
            ReleaseVersion::parse(&huge),
            Err(VersionParseError::TooLong(_))
        ));
    }

    #[test]
    fn test_basic_ordering() {
        assert!(v("1.0.0") < v("1.2.0"));
        assert!(v("1.2.0") < v("2.0.0"));
        assert!(v("2.0.0") > v("1.9.9"));
    }

    #[test]
    fn test_numeric_not_lexical() {
        // 1.10.0 would sort before 1.9.0 lexically
        assert!(v("1.9.0") < v("1.10.0"));
        assert!(v("2.31.0") > v("2.4.0"));
    }

    #[test]
    fn test_missing_components_compare_as_zero() {
        assert_eq!(v("1.2").cmp(&v("1.2.0")), Ordering::Equal);
        assert!(v("1.2") < v("1.2.1"));
    }

    #[test]
    fn test_pre_release_below_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
    }

    #[test]
    fn test_pre_release_numeric_vs_alpha() {
        // Numeric identifiers rank below alphanumeric ones
        assert!(v("1.0.0-1") < v("1.0.0-alpha"));
    }

    #[test]
    fn test_pre_release_numeric_ordering() {
        assert!(v("1.0.0-alpha.2") < v("1.0.0-alpha.11"));
    }

    #[test]
    fn test_pre_release_prefix_shorter_is_lower() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    }

    #[test]
    fn test_semver_precedence_chain() {
        // The ordering example from the semver specification
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(
                v(pair[0]) < v(pair[1]),
                "expected {} < {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(v("1.0.0+build.1").cmp(&v("1.0.0+build.2")), Ordering::Equal);
        assert_eq!(v("1.0.0+anything").cmp(&v("1.0.0")), Ordering::Equal);
    }

    #[test]
    fn test_equal_versions() {
        assert_eq!(v("1.2.3"), v("1.2.3"));
        assert_eq!(v("1.2.3").cmp(&v("1.2.3")), Ordering::Equal);
    }
}
