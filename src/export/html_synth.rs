//! HTML Synthesizer - serializes a node tree to markup.
//!
//! The walk is depth-first pre-order. Attributes are written in the order
//! they were set, followed by a single `style` attribute holding the
//! composed styles. All text and attribute values go through the configured
//! [`Escaper`].
//!
//! # Example
//!
//! ```
//! use tagtree::elements::{div, h1, p};
//! use tagtree::export::{render, render_pretty};
//!
//! let card = div()
//!     .class("card")
//!     .child(h1().text("Title"))
//!     .child(p().text("Body & more"))
//!     .build()?;
//!
//! assert_eq!(
//!     render(&card)?,
//!     r#"<div class="card"><h1>Title</h1><p>Body &amp; more</p></div>"#
//! );
//! assert_eq!(
//!     render_pretty(&card)?,
//!     "<div class=\"card\">\n  <h1>Title</h1>\n  <p>Body &amp; more</p>\n</div>"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::debug;

use super::escape::{Escaper, XmlEscaper};
use crate::error::RenderError;
use crate::model::{Child, Node, is_void, preserves_whitespace, validate_tag};
use crate::style::ToCss;

/// How void elements are closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
    /// `<br/>`, valid in both HTML and XHTML.
    #[default]
    SelfClosing,
    /// `<br>`.
    Html,
}

/// Widest indent unit the pretty printer emits; larger widths are clamped.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per nesting level in pretty mode (default 2, at most
    /// [`MAX_INDENT_WIDTH`]).
    pub indent_width: usize,
    /// Closing style for void elements.
    pub void_style: VoidStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            void_style: VoidStyle::default(),
        }
    }
}

/// Serializer holding a configuration and an escaping backend.
///
/// # Example
///
/// ```
/// use tagtree::elements::br;
/// use tagtree::export::{HtmlSerializer, RenderConfig, VoidStyle};
///
/// let serializer = HtmlSerializer::new().with_config(RenderConfig {
///     void_style: VoidStyle::Html,
///     ..RenderConfig::default()
/// });
/// assert_eq!(serializer.render(&br().build()?)?, "<br>");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer<E = XmlEscaper> {
    config: RenderConfig,
    escaper: E,
}

impl HtmlSerializer<XmlEscaper> {
    /// Create a serializer with default configuration and the quick-xml backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Escaper> HtmlSerializer<E> {
    /// Configure the serializer with custom settings.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the escaping backend.
    pub fn with_escaper<F: Escaper>(self, escaper: F) -> HtmlSerializer<F> {
        HtmlSerializer {
            config: self.config,
            escaper,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `node` without any added whitespace.
    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.synthesize(node, false)
    }

    /// Render `node` with one element per line where that leaves text
    /// untouched.
    ///
    /// An element whose children are all elements gets each child on its own
    /// line, indented by depth. Elements holding any text, and
    /// whitespace-sensitive elements such as `pre`, render compactly.
    pub fn render_pretty(&self, node: &Node) -> Result<String, RenderError> {
        self.synthesize(node, true)
    }

    /// Render a complete document, with a doctype when the root is `html`.
    pub fn render_document(&self, node: &Node, pretty: bool) -> Result<String, RenderError> {
        let body = self.synthesize(node, pretty)?;
        if node.tag() == "html" {
            Ok(format!("<!DOCTYPE html>\n{body}"))
        } else {
            Ok(body)
        }
    }

    fn synthesize(&self, node: &Node, pretty: bool) -> Result<String, RenderError> {
        let mut ctx = SynthesisContext {
            out: String::new(),
            escaper: &self.escaper,
            config: &self.config,
            pretty,
            depth: 0,
        };
        walk_node(node, &mut ctx)?;
        debug!(
            "rendered <{}> ({} bytes, pretty: {pretty})",
            node.tag(),
            ctx.out.len()
        );
        Ok(ctx.out)
    }
}

/// Render with the default serializer.
pub fn render(node: &Node) -> Result<String, RenderError> {
    HtmlSerializer::new().render(node)
}

/// Pretty-render with the default serializer.
pub fn render_pretty(node: &Node) -> Result<String, RenderError> {
    HtmlSerializer::new().render_pretty(node)
}

/// Render a document with the default serializer.
pub fn render_document(node: &Node, pretty: bool) -> Result<String, RenderError> {
    HtmlSerializer::new().render_document(node, pretty)
}

/// Context for the synthesis walk.
struct SynthesisContext<'a, E> {
    out: String,
    escaper: &'a E,
    config: &'a RenderConfig,
    pretty: bool,
    depth: usize,
}

impl<E> SynthesisContext<'_, E> {
    fn newline_and_indent(&mut self) {
        self.out.push('\n');
        let width = self.config.indent_width.min(MAX_INDENT_WIDTH);
        for _ in 0..self.depth.saturating_mul(width) {
            self.out.push(' ');
        }
    }
}

/// Walk a node and emit its markup.
fn walk_node<E: Escaper>(node: &Node, ctx: &mut SynthesisContext<'_, E>) -> Result<(), RenderError> {
    let tag = node.tag();
    validate_tag(tag).map_err(|e| RenderError::InconsistentTree {
        tag: tag.to_string(),
        reason: e.to_string(),
    })?;

    ctx.out.push('<');
    ctx.out.push_str(tag);
    for (name, value) in node.attributes().iter() {
        write_attribute(ctx, name, value);
    }
    if !node.styles().is_empty() {
        write_attribute(ctx, "style", &node.styles().to_css_string());
    }

    if is_void(tag) {
        if !node.children().is_empty() {
            return Err(RenderError::InconsistentTree {
                tag: tag.to_string(),
                reason: format!("void element holds {} children", node.children().len()),
            });
        }
        ctx.out.push_str(match ctx.config.void_style {
            VoidStyle::SelfClosing => "/>",
            VoidStyle::Html => ">",
        });
        return Ok(());
    }
    ctx.out.push('>');

    if ctx.pretty && breaks_lines(node) {
        ctx.depth += 1;
        for child in node.children() {
            ctx.newline_and_indent();
            walk_child(child, ctx)?;
        }
        ctx.depth -= 1;
        ctx.newline_and_indent();
    } else {
        // Whitespace inside this element is content; render the subtree as-is.
        let pretty = std::mem::replace(&mut ctx.pretty, false);
        for child in node.children() {
            walk_child(child, ctx)?;
        }
        ctx.pretty = pretty;
    }

    ctx.out.push_str("</");
    ctx.out.push_str(tag);
    ctx.out.push('>');
    Ok(())
}

fn walk_child<E: Escaper>(child: &Child, ctx: &mut SynthesisContext<'_, E>) -> Result<(), RenderError> {
    match child {
        Child::Element(node) => walk_node(node, ctx),
        Child::Text(text) => {
            let escaped = ctx.escaper.escape_text(text);
            ctx.out.push_str(&escaped);
            Ok(())
        }
    }
}

fn write_attribute<E: Escaper>(ctx: &mut SynthesisContext<'_, E>, name: &str, value: &str) {
    let escaped = ctx.escaper.escape_attribute_value(value);
    ctx.out.push(' ');
    ctx.out.push_str(name);
    ctx.out.push_str("=\"");
    ctx.out.push_str(&escaped);
    ctx.out.push('"');
}

/// Whether pretty mode may put each child of `node` on its own line.
fn breaks_lines(node: &Node) -> bool {
    !node.children().is_empty()
        && !preserves_whitespace(node.tag())
        && node
            .children()
            .iter()
            .all(|child| matches!(child, Child::Element(_)))
}
