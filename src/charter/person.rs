use serde::{Deserialize, Serialize};

/// A reference to a person or institution: a display name plus an optional
/// authority-file key for normalized linking.
///
/// Used for issuers, recipients, witnesses, sigillants and person index
/// entries. The key, when present, is emitted as `@key` on the
/// corresponding CEI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub name: String,
    pub key: Option<String>,
}

impl PersonRef {
    pub fn new(name: impl Into<String>) -> Self {
        PersonRef {
            name: name.into(),
            key: None,
        }
    }

    /// Attach an authority-file key. An empty key counts as absent.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = crate::charter::opt_text(key);
        self
    }
}

impl From<&str> for PersonRef {
    fn from(name: &str) -> Self {
        PersonRef::new(name)
    }
}

impl From<String> for PersonRef {
    fn from(name: String) -> Self {
        PersonRef::new(name)
    }
}
