//! The encoding pass: a single depth-first walk over a [`Speech`] tree,
//! emitting tags and character data through a `quick_xml::Writer`.

use std::io;

use quick_xml::{
    Writer,
    events::{BytesText, Event},
};

use crate::{
    element::{Content, Element, Rendering},
    error::EncodingError,
};

/// Writes `elements` in order. Failures are wrapped with the kind of the
/// node that was mid-emission.
pub(crate) fn write_elements<W: io::Write>(
    writer: &mut Writer<W>,
    elements: &[Element],
) -> Result<(), EncodingError> {
    for element in elements {
        write_element(writer, element)
            .map_err(|source| EncodingError::element(element.name(), source))?;
    }
    Ok(())
}

fn write_element<W: io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), EncodingError> {
    match element.rendering() {
        Rendering::CharData(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Rendering::Inline(speech) => {
            // An attached sub-builder contributes its children with no
            // enclosing tag of its own.
            write_elements(writer, speech.elements())?;
        }
        Rendering::Tag {
            name,
            attributes,
            content,
        } => {
            let mut element_writer = writer.create_element(name);
            for (key, value) in &attributes {
                element_writer = element_writer.with_attribute((*key, value.as_ref()));
            }
            match content {
                Content::Empty => {
                    // A matched open/close pair, never a self-closing tag.
                    element_writer.write_inner_content(|_| -> io::Result<()> { Ok(()) })?;
                }
                Content::CharData(text) => {
                    element_writer.write_text_content(BytesText::new(text))?;
                }
                Content::Children(child) => {
                    element_writer.write_inner_content(|writer| -> io::Result<()> {
                        write_elements(writer, child.elements())?;
                        Ok(())
                    })?;
                }
            }
        }
    }
    Ok(())
}
