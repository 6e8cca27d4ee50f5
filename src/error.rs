use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// Errors raised while constructing a typed attribute value.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The text supplied for an audio source is not a well-formed
    /// absolute URL.
    #[error("invalid audio source URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Errors raised while serializing a [`Speech`](crate::Speech) tree.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// A write failed while a specific element was being emitted. Nested
    /// failures chain, identifying the path down to the failing node.
    #[error("failed to encode {element} element: {source}")]
    Element {
        /// Kind of the node that was mid-emission.
        element: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<EncodingError>,
    },
    /// XML generation error from `quick-xml`.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// The output sink rejected a write.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The generated document was not valid UTF-8.
    #[error("generated SSML is not valid UTF-8: {0}")]
    FromUtf8(#[from] FromUtf8Error),
}

impl EncodingError {
    pub(crate) fn element(element: &'static str, source: EncodingError) -> Self {
        Self::Element {
            element,
            source: Box::new(source),
        }
    }
}

// Lets encoding errors cross the `io::Result` closures used by
// `quick_xml::Writer::write_inner_content`.
impl From<EncodingError> for io::Error {
    fn from(err: EncodingError) -> Self {
        io::Error::other(err)
    }
}
