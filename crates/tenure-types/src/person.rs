use serde::{Deserialize, Serialize};

/// Contributor identity key.
///
/// Raw selection modes key by the name recorded on the commit; unified
/// modes key by the canonical person's name after identity merging.
/// Uniqueness therefore depends on the selection mode that produced the
/// containing activity list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
