//! CEI serialization: element tree, schema tables, serializer, renderer.

pub mod element;
pub mod render;
pub mod schema;
pub mod serializer;

pub use element::{Element, Node};
pub use render::{render, RenderConfig, RenderError};
pub use serializer::{CeiSerializer, SchemaMappingError};

use thiserror::Error;

use crate::charter::{Charter, CharterGroup};

/// Any failure on the serialize-then-render path.
#[derive(Debug, Error)]
pub enum CeiError {
    #[error(transparent)]
    Schema(#[from] SchemaMappingError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Serialize one charter and render it in a single call.
pub fn charter_to_string(charter: &Charter, config: &RenderConfig) -> Result<String, CeiError> {
    let xml = CeiSerializer::new().charter_to_xml(charter)?;
    Ok(render(&xml, config)?)
}

/// Serialize a charter group and render it in a single call.
pub fn group_to_string(group: &CharterGroup, config: &RenderConfig) -> Result<String, CeiError> {
    let xml = CeiSerializer::new().group_to_xml(group)?;
    Ok(render(&xml, config)?)
}
