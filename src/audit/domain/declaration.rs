/// Delimiter between a package name and its pinned version
const VERSION_DELIMITER: &str = "==";

/// One parsed `name==version` entry from an uploaded requirements file.
///
/// Immutable once created. Duplicates are allowed - a name appearing on
/// several lines is audited independently each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    name: String,
    declared_version: String,
}

impl DependencyDeclaration {
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_version(&self) -> &str {
        &self.declared_version
    }

    /// Reconstructs the raw declaration line (`name==version`).
    ///
    /// This is the form stored in both report artifacts, so name and
    /// version must stay recoverable from it.
    pub fn raw(&self) -> String {
        format!("{}{}{}", self.name, VERSION_DELIMITER, self.declared_version)
    }
}

impl std::fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Parses raw uploaded text into an ordered sequence of declarations.
///
/// Every line is trimmed; empty lines are skipped. A line parses only if it
/// contains exactly one `==` delimiter. Anything else (no delimiter, two or
/// more delimiters) is dropped silently - malformed input is never an error.
///
/// Input line order is preserved and duplicates are kept.
pub fn parse_declarations(text: &str) -> Vec<DependencyDeclaration> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<DependencyDeclaration> {
    let parts: Vec<&str> = line.split(VERSION_DELIMITER).collect();
    if parts.len() != 2 {
        return None;
    }
    Some(DependencyDeclaration::new(parts[0], parts[1]))
}
