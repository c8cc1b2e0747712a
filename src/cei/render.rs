use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cei::element::{Element, Node};

/// Errors raised while rendering an element tree to text.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("XML write error: {0}")]
    Write(#[from] quick_xml::Error),

    #[error("rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Rendering options, passed explicitly per call — never ambient state.
///
/// Both modes are deterministic: the same tree and config always produce
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Emit an `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub declaration: bool,
    /// `None` renders a single line; `Some(n)` indents nesting by n spaces.
    pub indent: Option<usize>,
}

impl RenderConfig {
    /// Indented output with a declaration, for documents meant to be read.
    pub fn pretty() -> Self {
        RenderConfig {
            declaration: true,
            indent: Some(2),
        }
    }

    /// Single-line output without a declaration, for embedding.
    pub fn compact() -> Self {
        RenderConfig {
            declaration: false,
            indent: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::pretty()
    }
}

/// Render an element tree to an XML string.
///
/// Text and attribute values are XML-escaped by the writer; childless
/// elements render self-closed.
pub fn render(root: &Element, config: &RenderConfig) -> Result<String, RenderError> {
    let mut writer = match config.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };
    if config.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, root)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
) -> Result<(), quick_xml::Error> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name, value));
    }
    if !element.has_children() {
        return writer.write_event(Event::Empty(start));
    }
    writer.write_event(Event::Start(start))?;
    for node in element.nodes() {
        match node {
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            Node::Element(child) => write_element(writer, child)?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))
}
