//! Maps tag names to structural categories.
//!
//! The category decides both which children a node admits and which style
//! axes apply to it. Voidness is tracked separately because several void
//! elements (img, input, meta) also need their non-void category for gating.

/// Structural classification of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Flow container (div, p, section, headings, ...).
    BlockContainer,
    /// Phrasing element (span, a, em, ...). Holds text only.
    Inline,
    /// ul, ol, dl.
    List,
    /// li, dt, dd.
    ListItem,
    /// table.
    TableRoot,
    /// thead, tbody, tfoot.
    TableSection,
    /// tr.
    TableRow,
    /// th, td.
    TableCell,
    /// form.
    FormRoot,
    /// input, select, button, label, ...
    FormControl,
    /// head.
    DocumentHead,
    /// body.
    DocumentBody,
    /// html.
    DocumentRoot,
    /// title, meta, link, style, script, base.
    Metadata,
    /// Void elements with no other structural role (hr, wbr, col, ...).
    Void,
    /// Anything not in the table.
    Unclassified,
}

/// Map a tag name to its structural category.
pub fn classify(tag: &str) -> Category {
    match tag {
        // Document skeleton
        "html" => Category::DocumentRoot,
        "head" => Category::DocumentHead,
        "body" => Category::DocumentBody,
        "title" | "meta" | "link" | "style" | "script" | "base" => Category::Metadata,

        // Block containers
        "div" | "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "section" | "article"
        | "aside" | "nav" | "header" | "footer" | "main" | "blockquote" | "pre" | "figure"
        | "figcaption" | "address" | "details" | "summary" | "hgroup" | "caption" => {
            Category::BlockContainer
        }

        // Lists
        "ul" | "ol" | "dl" | "menu" => Category::List,
        "li" | "dt" | "dd" => Category::ListItem,

        // Inline elements (img and br are also void)
        "span" | "a" | "strong" | "em" | "b" | "i" | "u" | "s" | "code" | "small" | "sub"
        | "sup" | "mark" | "abbr" | "cite" | "q" | "kbd" | "samp" | "var" | "time" | "img"
        | "br" => Category::Inline,

        // Tables
        "table" => Category::TableRoot,
        "thead" | "tbody" | "tfoot" => Category::TableSection,
        "tr" => Category::TableRow,
        "th" | "td" => Category::TableCell,

        // Forms
        "form" => Category::FormRoot,
        "input" | "textarea" | "button" | "select" | "option" | "optgroup" | "fieldset"
        | "legend" | "label" | "output" | "datalist" => Category::FormControl,

        // Pure void elements
        "hr" | "wbr" | "col" | "area" | "source" | "track" | "embed" => Category::Void,

        _ => Category::Unclassified,
    }
}

/// Whether `tag` is a void element (never has children or a closing tag).
pub fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Whether text inside `tag` is whitespace-sensitive or raw, so the pretty
/// printer must not reflow around it.
pub fn preserves_whitespace(tag: &str) -> bool {
    matches!(tag, "pre" | "textarea" | "script" | "style")
}
