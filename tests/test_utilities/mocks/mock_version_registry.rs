use async_trait::async_trait;
use req_audit::prelude::*;
use std::collections::HashMap;

enum MockOutcome {
    Version(String),
    Status(u16),
    Timeout,
    Unreachable(String),
}

/// Mock VersionRegistry for testing
///
/// Answers from a fixed table; names without an entry behave like a 404.
pub struct MockVersionRegistry {
    outcomes: HashMap<String, MockOutcome>,
}

impl MockVersionRegistry {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    pub fn with_version(mut self, package: &str, version: &str) -> Self {
        self.outcomes
            .insert(package.to_string(), MockOutcome::Version(version.to_string()));
        self
    }

    pub fn with_status(mut self, package: &str, status: u16) -> Self {
        self.outcomes
            .insert(package.to_string(), MockOutcome::Status(status));
        self
    }

    pub fn with_timeout(mut self, package: &str) -> Self {
        self.outcomes
            .insert(package.to_string(), MockOutcome::Timeout);
        self
    }

    pub fn with_unreachable(mut self, package: &str, detail: &str) -> Self {
        self.outcomes.insert(
            package.to_string(),
            MockOutcome::Unreachable(detail.to_string()),
        );
        self
    }
}

impl Default for MockVersionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionRegistry for MockVersionRegistry {
    async fn latest_version(
        &self,
        package_name: &str,
    ) -> std::result::Result<String, LookupError> {
        match self.outcomes.get(package_name) {
            Some(MockOutcome::Version(version)) => Ok(version.clone()),
            Some(MockOutcome::Status(status)) => Err(LookupError::BadStatus(*status)),
            Some(MockOutcome::Timeout) => Err(LookupError::Timeout),
            Some(MockOutcome::Unreachable(detail)) => {
                Err(LookupError::Unreachable(detail.clone()))
            }
            None => Err(LookupError::BadStatus(404)),
        }
    }
}
