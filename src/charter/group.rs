use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::charter::{opt_text, Charter};
use crate::types::ValidationError;

/// A named, ordered collection of charters: an archival fonds or
/// collection.
///
/// The charter sequence is archival order — it is meaningful and survives
/// serialization untouched. Identifiers must be unique within the group,
/// keyed on the normalized form that ends up in `cei:idno/@id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterGroup {
    name: String,
    repository: Option<String>,
    description: Option<String>,
    charters: Vec<Charter>,
}

impl CharterGroup {
    pub fn new(name: impl Into<String>, charters: Vec<Charter>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyGroupName);
        }
        let mut seen = BTreeSet::new();
        for charter in &charters {
            let norm = charter.id().norm();
            if !seen.insert(norm.clone()) {
                return Err(ValidationError::DuplicateCharterId(norm));
            }
        }
        Ok(CharterGroup {
            name,
            repository: None,
            description: None,
            charters,
        })
    }

    /// Name of the repository holding the fonds.
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = opt_text(repository);
        self
    }

    /// Free-text description of the collection.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = opt_text(description);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn charters(&self) -> &[Charter] {
        &self.charters
    }
}
