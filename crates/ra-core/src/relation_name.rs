//! Names of stored relations

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

/// Names allocated for intermediate results are this prefix plus a counter
const SYNTHETIC_PREFIX: &str = "relation";

static SYNTHETIC_RE: OnceLock<regex::Regex> = OnceLock::new();

fn synthetic_regex() -> &'static regex::Regex {
    SYNTHETIC_RE.get_or_init(|| regex::Regex::new(r"^relation[0-9]+$").expect("valid regex"))
}

/// Name under which a relation is stored and referenced in expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationName(String);

impl RelationName {
    /// Wrap a name taken from input; the loader has already rejected empty names
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "relation names are never empty");
        Self(name)
    }

    /// Name of the `n`-th intermediate relation of a session
    pub fn synthetic(n: usize) -> Self {
        Self(format!("{SYNTHETIC_PREFIX}{n}"))
    }

    /// Whether this name uses the reserved intermediate naming scheme
    pub fn is_synthetic(&self) -> bool {
        synthetic_regex().is_match(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RelationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lets stores keyed by name be queried with a plain `&str`
impl Borrow<str> for RelationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_names() {
        let name = RelationName::synthetic(3);
        assert_eq!(name.as_str(), "relation3");
        assert_eq!(name.to_string(), "relation3");
        assert!(name.is_synthetic());
    }

    #[test]
    fn test_user_names_are_not_synthetic() {
        assert!(!RelationName::new("relation").is_synthetic());
        assert!(!RelationName::new("relations1").is_synthetic());
        assert!(!RelationName::new("Relation1").is_synthetic());
        assert!(!RelationName::from("students").is_synthetic());
    }

    #[test]
    fn test_lookup_by_str() {
        let mut names = std::collections::HashSet::new();
        names.insert(RelationName::new("Students"));
        assert!(names.contains("Students"));
        assert!(!names.contains("Courses"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = RelationName::synthetic(2);
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"relation2\"");
    }
}
