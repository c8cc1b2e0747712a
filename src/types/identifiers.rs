use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Characters that survive identifier normalization unencoded: the URL
/// unreserved set plus `/`.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// A charter identifier.
///
/// Carries the human-readable text shown as `cei:idno` content and an
/// optional normalized override for cases where the archival signature
/// differs from the id the import platform should use. The normalized form
/// emitted as `cei:idno/@id` is always percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharterId {
    text: String,
    norm: Option<String>,
}

impl CharterId {
    /// Create an identifier from its human-readable text.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        Ok(CharterId { text, norm: None })
    }

    /// Create an identifier with a normalized override. An empty override
    /// counts as absent.
    pub fn with_norm(
        text: impl Into<String>,
        norm: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut id = CharterId::new(text)?;
        let norm = norm.into();
        if !norm.is_empty() {
            id.norm = Some(norm);
        }
        Ok(id)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The percent-encoded normalized identifier: the override if one is
    /// set, otherwise the text.
    pub fn norm(&self) -> String {
        let source = self.norm.as_deref().unwrap_or(&self.text);
        utf8_percent_encode(source, ID_ENCODE_SET).to_string()
    }
}
