use crate::audit::domain::DependencyDeclaration;
use std::collections::{BTreeSet, HashSet};

/// Package names that are administratively banned by default.
/// A config file or CLI flag replaces this set entirely.
const DEFAULT_DENYLIST: [&str; 2] = ["malware-lib", "banned-lib"];

/// A fixed set of package names considered illegal to depend on.
///
/// Built once from configuration and injected into the pipeline - never a
/// hidden global, so tests can swap in their own sets.
#[derive(Debug, Clone)]
pub struct Denylist {
    names: HashSet<String>,
}

impl Denylist {
    /// Builds a denylist from configured names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the distinct declared names that appear on the denylist.
    ///
    /// Pure and total: no I/O, no failure mode, empty set if nothing
    /// matches. The result is sorted so serialized reports are
    /// reproducible regardless of declaration order.
    pub fn classify(&self, declarations: &[DependencyDeclaration]) -> BTreeSet<String> {
        declarations
            .iter()
            .map(|declaration| declaration.name())
            .filter(|name| self.names.contains(*name))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::from_names(DEFAULT_DENYLIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declarations(names: &[&str]) -> Vec<DependencyDeclaration> {
        names
            .iter()
            .map(|name| DependencyDeclaration::new(*name, "1.0"))
            .collect()
    }

    #[test]
    fn test_classify_match() {
        let denylist = Denylist::from_names(["malware-lib"]);
        let result = denylist.classify(&declarations(&["requests", "malware-lib"]));
        assert_eq!(result.len(), 1);
        assert!(result.contains("malware-lib"));
    }

    #[test]
    fn test_classify_no_match_is_empty() {
        let denylist = Denylist::from_names(["malware-lib"]);
        let result = denylist.classify(&declarations(&["requests", "flask"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_classify_deduplicates() {
        let denylist = Denylist::from_names(["a"]);
        let result = denylist.classify(&declarations(&["a", "b", "a"]));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_classify_order_insensitive() {
        let denylist = Denylist::from_names(["a", "b"]);
        let forward = denylist.classify(&declarations(&["a", "b", "c"]));
        let reversed = denylist.classify(&declarations(&["c", "b", "a"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_classify_result_is_sorted() {
        let denylist = Denylist::from_names(["zeta", "alpha"]);
        let result = denylist.classify(&declarations(&["zeta", "alpha"]));
        let names: Vec<&String> = result.iter().collect();
        assert_eq!(names, [&"alpha".to_string(), &"zeta".to_string()]);
    }

    #[test]
    fn test_classify_empty_declarations() {
        let denylist = Denylist::default();
        assert!(denylist.classify(&[]).is_empty());
    }

    #[test]
    fn test_default_denylist_contents() {
        let denylist = Denylist::default();
        assert!(denylist.contains("malware-lib"));
        assert!(denylist.contains("banned-lib"));
        assert_eq!(denylist.len(), 2);
    }
}
