//! Export module: serializing node trees to markup.
//!
//! # Architecture
//!
//! [`HtmlSerializer`] uses a builder pattern:
//! - `new()` creates a serializer with default configuration
//! - `with_config()` / `with_escaper()` allow customization
//! - `render()` / `render_pretty()` / `render_document()` produce the text
//!
//! The free functions [`render`], [`render_pretty`] and [`render_document`]
//! use the defaults.

mod escape;
mod html_synth;

pub use escape::{Escaper, XmlEscaper};
pub use html_synth::{
    HtmlSerializer, RenderConfig, VoidStyle, render, render_document, render_pretty,
};
