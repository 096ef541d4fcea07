//! XML serialization for board documents
//!
//! Output is UTF-8 with an XML declaration and two-space indentation.
//! Roots without children are written as self-closing elements.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{BoardPositions, Distances};
use crate::error::{BoardError, Result};

type XmlWriter = Writer<Vec<u8>>;

/// A document that can be written below an XML declaration.
pub trait XmlDocument {
    fn root_name(&self) -> &'static str;

    fn is_empty(&self) -> bool;

    fn write_children(&self, w: &mut XmlWriter) -> Result<()>;
}

impl XmlDocument for BoardPositions {
    fn root_name(&self) -> &'static str {
        "boardPositions"
    }

    fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn write_children(&self, w: &mut XmlWriter) -> Result<()> {
        for position in &self.positions {
            let id = position.id.to_string();
            start(w, "boardPosition", Some(&id))?;
            for action in &position.actions {
                start(w, "action", None)?;
                text_element(w, "destination", &action.destination.to_string())?;
                text_element(w, "transportation", action.transportation.as_str())?;
                end(w, "action")?;
            }
            end(w, "boardPosition")?;
        }
        Ok(())
    }
}

impl XmlDocument for Distances {
    fn root_name(&self) -> &'static str {
        "distances"
    }

    fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    fn write_children(&self, w: &mut XmlWriter) -> Result<()> {
        for from in &self.sources {
            let from_id = from.id.to_string();
            start(w, "from", Some(&from_id))?;
            for to in &from.targets {
                let to_id = to.id.to_string();
                start(w, "to", Some(&to_id))?;
                text_element(w, "distance", &to.distance.to_string())?;
                end(w, "to")?;
            }
            end(w, "from")?;
        }
        Ok(())
    }
}

fn emit(w: &mut XmlWriter, element: &str, event: Event<'_>) -> Result<()> {
    w.write_event(event).map_err(|e| BoardError::xml(element, e))
}

fn start(w: &mut XmlWriter, name: &str, id: Option<&str>) -> Result<()> {
    let mut elem = BytesStart::new(name);
    if let Some(id) = id {
        elem.push_attribute(("id", id));
    }
    emit(w, name, Event::Start(elem))
}

fn end(w: &mut XmlWriter, name: &str) -> Result<()> {
    emit(w, name, Event::End(BytesEnd::new(name)))
}

fn text_element(w: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    start(w, name, None)?;
    emit(w, name, Event::Text(BytesText::new(text)))?;
    end(w, name)
}

/// Serialize `doc` to bytes, declaration included.
pub fn to_xml_bytes<D: XmlDocument + ?Sized>(doc: &D) -> Result<Vec<u8>> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);
    let root = doc.root_name();

    // quick-xml quotes declaration values with `"`; lxml-produced boards use `'`.
    // The runtime's parser accepts either.
    emit(
        &mut w,
        "xml",
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    if doc.is_empty() {
        emit(&mut w, root, Event::Empty(BytesStart::new(root)))?;
    } else {
        emit(&mut w, root, Event::Start(BytesStart::new(root)))?;
        doc.write_children(&mut w)?;
        end(&mut w, root)?;
    }

    let mut bytes = w.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize `doc` and write it to `path`, replacing any existing file.
#[tracing::instrument(skip(path, doc), fields(path = %path.display(), root = doc.root_name()))]
pub fn write_document<D: XmlDocument + ?Sized>(path: &Path, doc: &D) -> Result<u64> {
    let bytes = to_xml_bytes(doc)?;
    fs::write(path, &bytes).map_err(|e| BoardError::io_operation("write", path.display(), e))?;
    tracing::debug!(bytes = bytes.len(), "write_document");
    Ok(bytes.len() as u64)
}
