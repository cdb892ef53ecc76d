//! Conversion error types.
//!
//! Two families: structure errors (a required top-level section is absent)
//! and format errors (a required attribute is missing or a value fails its
//! field's parse rule). Both are fatal to the whole conversion.

use thiserror::Error;

pub type XmlResult<T> = Result<T, XmlError>;

#[derive(Error, Debug)]
pub enum XmlError {
    /// The document lacks a required top-level section.
    #[error("document missing required <{section}> section")]
    MissingSection { section: &'static str },

    /// A required attribute is absent from an element.
    #[error("<{element}> missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A value that must be an integer failed to parse as one.
    #[error("invalid integer for {what}: '{value}'")]
    InvalidInt { what: &'static str, value: String },

    /// A value that must be a float failed to parse as one.
    #[error("invalid number for {what}: '{value}'")]
    InvalidFloat { what: &'static str, value: String },

    /// An edge endpoint did not contain a comma separator.
    #[error("malformed edge endpoint '{value}' (expected \"<node>,<port>\")")]
    MalformedEndpoint { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}
