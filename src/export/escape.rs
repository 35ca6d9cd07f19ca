//! Escaping primitives of the markup-emission backend.
//!
//! The serializer never writes text or attribute values without passing
//! them through an [`Escaper`]. Escaping lives in exactly one place, so
//! text and attributes can't drift apart and nothing gets escaped twice.

use std::borrow::Cow;

/// Escaping service injected into the serializer.
pub trait Escaper {
    /// Escape character data (element content).
    fn escape_text<'a>(&self, text: &'a str) -> Cow<'a, str>;

    /// Escape a double-quoted attribute value.
    fn escape_attribute_value<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

/// Default backend, built on `quick_xml::escape`.
///
/// Text escapes `<`, `>` and `&`; attribute values additionally escape both
/// quote characters. Output is valid for both HTML and XHTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEscaper;

impl Escaper for XmlEscaper {
    fn escape_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        quick_xml::escape::partial_escape(text)
    }

    fn escape_attribute_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        quick_xml::escape::escape(value)
    }
}
