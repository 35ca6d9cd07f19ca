//! Constructors for common elements.
//!
//! Each function is a thin wrapper returning a [`NodeBuilder`] for its tag;
//! all validation still happens in [`NodeBuilder::build`].
//!
//! ```
//! use tagtree::elements::{div, h1, p};
//!
//! let card = div()
//!     .class("card")
//!     .child(h1().text("Title"))
//!     .child(p().text("Body"))
//!     .build()?;
//! assert_eq!(card.children().len(), 2);
//! # Ok::<(), tagtree::BuildError>(())
//! ```

use super::node::NodeBuilder;

macro_rules! elements {
    ($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name() -> NodeBuilder {
                NodeBuilder::new($tag)
            }
        )*

        /// Every tag with a constructor in this module.
        pub const TAGS: &[&str] = &[$($tag,)*];
    };
}

elements! {
    // Document structure
    /// Root of an HTML document.
    html => "html",
    /// Document metadata container.
    head => "head",
    /// Document content.
    body => "body",
    title => "title",
    meta => "meta",
    link => "link",

    // Sectioning
    header => "header",
    footer => "footer",
    section => "section",
    article => "article",
    aside => "aside",
    nav => "nav",
    /// Main content of the document.
    main => "main",
    /// Generic flow container.
    div => "div",
    /// Generic inline container.
    span => "span",

    // Text
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    p => "p",
    blockquote => "blockquote",
    /// Preformatted text; whitespace is kept verbatim by the pretty printer.
    pre => "pre",
    /// Thematic break (void).
    hr => "hr",
    /// Line break (void).
    br => "br",
    code => "code",
    em => "em",
    strong => "strong",
    small => "small",
    s => "s",
    sub => "sub",
    sup => "sup",
    a => "a",
    /// Image (void).
    img => "img",

    // Lists
    ul => "ul",
    ol => "ol",
    li => "li",
    dl => "dl",
    dt => "dt",
    dd => "dd",

    // Tables
    table => "table",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    tr => "tr",
    th => "th",
    td => "td",
    colgroup => "colgroup",
    /// Table column (void).
    col => "col",

    // Forms
    form => "form",
    /// Form input (void).
    input => "input",
    textarea => "textarea",
    button => "button",
    select => "select",
    option => "option",
    label => "label",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::validate_tag;

    #[test]
    fn test_every_catalog_tag_is_valid() {
        for tag in TAGS {
            assert!(validate_tag(tag).is_ok(), "{tag}");
        }
    }

    #[test]
    fn test_constructors_build_their_tag() {
        assert_eq!(div().build().unwrap().tag(), "div");
        assert_eq!(h6().build().unwrap().tag(), "h6");
        assert_eq!(option().text("One").build().unwrap().tag(), "option");
    }

    #[test]
    fn test_table_from_catalog() {
        let table = table()
            .child(thead().child(tr().child(th().text("Name"))))
            .child(tbody().child(tr().child(td().text("Ada"))))
            .build()
            .unwrap();
        assert_eq!(table.text_content(), "NameAda");
    }

    #[test]
    fn test_form_from_catalog() {
        let signup = form()
            .child(label().text("Email").child(input().attribute("type", "email")))
            .child(select().child(option().text("A")).child(option().text("B")))
            .child(button().attribute("type", "submit").text("Send"))
            .build()
            .unwrap();
        assert_eq!(signup.children().len(), 3);

        let nested = form().child(form()).build();
        assert!(nested.is_err());
    }
}
