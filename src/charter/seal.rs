use serde::{Deserialize, Serialize};

use crate::charter::{opt_text, PersonRef};

/// One seal legend, optionally tied to a place on the seal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealLegend {
    pub place: Option<String>,
    pub text: String,
}

impl SealLegend {
    pub fn new(text: impl Into<String>) -> Self {
        SealLegend {
            place: None,
            text: text.into(),
        }
    }

    pub fn at_place(place: impl Into<String>, text: impl Into<String>) -> Self {
        SealLegend {
            place: opt_text(place),
            text: text.into(),
        }
    }
}

/// Description of a single physical seal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seal {
    pub condition: Option<String>,
    pub dimensions: Option<String>,
    pub legends: Vec<SealLegend>,
    pub material: Option<String>,
    pub sigillant: Option<PersonRef>,
}

impl Seal {
    pub fn new() -> Self {
        Seal::default()
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = opt_text(condition);
        self
    }

    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = opt_text(dimensions);
        self
    }

    pub fn with_legend(mut self, legend: SealLegend) -> Self {
        self.legends.push(legend);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = opt_text(material);
        self
    }

    pub fn with_sigillant(mut self, sigillant: impl Into<PersonRef>) -> Self {
        self.sigillant = Some(sigillant.into());
        self
    }

    /// A seal with no recorded detail produces no `cei:seal` element.
    pub fn is_empty(&self) -> bool {
        self.condition.is_none()
            && self.dimensions.is_none()
            && self.legends.is_empty()
            && self.material.is_none()
            && self.sigillant.is_none()
    }
}

/// Seal information on a charter: either one free-text description or a
/// list of individual seals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SealDesc {
    Text(String),
    Seals(Vec<Seal>),
}

impl From<&str> for SealDesc {
    fn from(text: &str) -> Self {
        SealDesc::Text(text.to_string())
    }
}

impl From<String> for SealDesc {
    fn from(text: String) -> Self {
        SealDesc::Text(text)
    }
}

impl From<Seal> for SealDesc {
    fn from(seal: Seal) -> Self {
        SealDesc::Seals(vec![seal])
    }
}

impl From<Vec<Seal>> for SealDesc {
    fn from(seals: Vec<Seal>) -> Self {
        SealDesc::Seals(seals)
    }
}
