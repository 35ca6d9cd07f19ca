//! Tree nodes and their construction API.
//!
//! A [`Node`] can only be obtained through [`Node::new`] or a
//! [`NodeBuilder`], and children can only be added through the `attach_*`
//! methods. Every path validates the tag, the attribute names, the style
//! selections and the containment rules, so a finished tree is always
//! well-formed and the serializer never has to re-check it.

use std::fmt;

use log::trace;

use super::containment::{can_contain, can_contain_text};
use crate::error::{BuildError, Result};
use crate::style::{StyleMap, StyleOptions, compose};

/// Tag name used in errors when the rejected child is text.
pub const TEXT_CHILD: &str = "#text";

/// Ordered attribute map.
///
/// Keys are unique. Iteration follows the order in which keys were first
/// set; setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, validating the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_attribute_name(&name)?;
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove `name`, returning its value. Later keys keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from `(name, value)` pairs, in order.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut attributes = Attributes::new();
        for (name, value) in pairs {
            attributes.set(name, value)?;
        }
        Ok(attributes)
    }
}

/// A child of a node: a nested element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Node),
    Text(String),
}

impl Child {
    /// Tag of the child as reported in containment errors.
    fn tag(&self) -> &str {
        match self {
            Child::Element(node) => node.tag(),
            Child::Text(_) => TEXT_CHILD,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Element(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// An element of the tree.
///
/// Owns its children exclusively; a node moved into a parent can no longer
/// be attached anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    attributes: Attributes,
    options: StyleOptions,
    styles: StyleMap,
    children: Vec<Child>,
}

impl Node {
    /// Create a node with initial attributes and style selections.
    ///
    /// # Example
    ///
    /// ```
    /// use tagtree::Node;
    /// use tagtree::style::{StyleOptions, TextAlign};
    ///
    /// let node = Node::new(
    ///     "div",
    ///     [("class", "card")],
    ///     StyleOptions::new().text_align(TextAlign::Center),
    /// )?;
    /// assert_eq!(node.styles().get("text-align"), Some("center"));
    /// # Ok::<(), tagtree::BuildError>(())
    /// ```
    pub fn new<I, K, V>(tag: &str, attributes: I, options: StyleOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        validate_tag(tag)?;
        let attributes = Attributes::try_from_pairs(attributes)?;
        let styles = compose(tag, &options)?;
        Ok(Self {
            tag: tag.to_string(),
            attributes,
            options,
            styles,
            children: Vec::new(),
        })
    }

    /// Create a bare node with no attributes or styles.
    pub fn element(tag: &str) -> Result<Self> {
        Self::new(tag, std::iter::empty::<(String, String)>(), StyleOptions::new())
    }

    /// Start a [`NodeBuilder`] for `tag`.
    pub fn builder(tag: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(tag)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The composed style properties.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// The selections the styles were composed from.
    pub fn style_options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Set an attribute on this node.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.attributes.set(name, value)
    }

    /// Replace the style selections and recompose the style map.
    ///
    /// On error the node keeps its previous styles.
    pub fn restyle(&mut self, options: StyleOptions) -> Result<()> {
        self.styles = compose(&self.tag, &options)?;
        self.options = options;
        Ok(())
    }

    /// Attach a child element or text, enforcing the containment rules.
    pub fn attach_child(&mut self, child: impl Into<Child>) -> Result<()> {
        let child = child.into();
        let admitted = match &child {
            Child::Element(node) => can_contain(&self.tag, node.tag()),
            Child::Text(_) => can_contain_text(&self.tag),
        };
        if !admitted {
            return Err(BuildError::StructuralViolation {
                parent: self.tag.clone(),
                child: child.tag().to_string(),
            });
        }
        trace!("<{}> += <{}>", self.tag, child.tag());
        self.children.push(child);
        Ok(())
    }

    /// Attach a text child.
    pub fn attach_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.attach_child(Child::Text(text.into()))
    }

    /// Construct a fresh `tag` element with `attributes` and attach it.
    pub fn attach_attributed_child<I, K, V>(&mut self, tag: &str, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let child = Node::new(tag, attributes, StyleOptions::new())?;
        self.attach_child(child)
    }

    /// Concatenated text of this subtree, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Element(node) => node.collect_text(out),
                Child::Text(text) => out.push_str(text),
            }
        }
    }

    /// Push a child without running the containment rules.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }
}

impl fmt::Display for Node {
    /// Compact rendering with the default serializer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = crate::export::render(self).map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}

/// A pending child of a [`NodeBuilder`].
#[derive(Debug, Clone)]
pub enum BuilderChild {
    Node(Node),
    Builder(NodeBuilder),
    Text(String),
}

impl From<Node> for BuilderChild {
    fn from(node: Node) -> Self {
        BuilderChild::Node(node)
    }
}

impl From<NodeBuilder> for BuilderChild {
    fn from(builder: NodeBuilder) -> Self {
        BuilderChild::Builder(builder)
    }
}

impl From<&str> for BuilderChild {
    fn from(text: &str) -> Self {
        BuilderChild::Text(text.to_string())
    }
}

impl From<String> for BuilderChild {
    fn from(text: String) -> Self {
        BuilderChild::Text(text)
    }
}

/// Declarative builder for a node and its subtree.
///
/// Nothing is validated until [`build`](NodeBuilder::build), which checks
/// the whole subtree depth-first and stops at the first error.
///
/// # Example
///
/// ```
/// use tagtree::Node;
///
/// let card = Node::builder("div")
///     .attribute("class", "card")
///     .child(Node::builder("h1").text("Title"))
///     .child(Node::builder("p").text("Body & more"))
///     .build()?;
/// assert_eq!(card.children().len(), 2);
/// # Ok::<(), tagtree::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    tag: String,
    attributes: Vec<(String, String)>,
    options: StyleOptions,
    children: Vec<BuilderChild>,
}

impl NodeBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            options: StyleOptions::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attribute("class", class)
    }

    /// Shorthand for the `id` attribute.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attribute("id", id)
    }

    pub fn style(mut self, options: StyleOptions) -> Self {
        self.options = options;
        self
    }

    /// Adjust the style selections in place.
    pub fn with_style(mut self, f: impl FnOnce(StyleOptions) -> StyleOptions) -> Self {
        self.options = f(std::mem::take(&mut self.options));
        self
    }

    pub fn child(mut self, child: impl Into<BuilderChild>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<BuilderChild>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(BuilderChild::Text(text.into()))
    }

    /// Validate and build the subtree.
    pub fn build(self) -> Result<Node> {
        let mut node = Node::new(&self.tag, self.attributes, self.options)?;
        for child in self.children {
            match child {
                BuilderChild::Node(child) => node.attach_child(child)?,
                BuilderChild::Builder(builder) => node.attach_child(builder.build()?)?,
                BuilderChild::Text(text) => node.attach_text(text)?,
            }
        }
        Ok(node)
    }
}

/// Check that `tag` is a lowercase ASCII identifier (`[a-z][a-z0-9-]*`).
pub(crate) fn validate_tag(tag: &str) -> Result<()> {
    let malformed = |reason: &str| BuildError::MalformedTag {
        tag: tag.to_string(),
        reason: reason.to_string(),
    };
    let mut chars = tag.chars();
    match chars.next() {
        None => return Err(malformed("empty tag")),
        Some(c) if !c.is_ascii_lowercase() => {
            return Err(malformed("must start with a lowercase ASCII letter"));
        }
        Some(_) => {}
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')) {
        return Err(malformed(&format!("unexpected character {c:?}")));
    }
    Ok(())
}

/// Check that `name` can be emitted as an attribute name.
fn validate_attribute_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| BuildError::InvalidAttribute {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("empty name"));
    }
    if name.eq_ignore_ascii_case("style") {
        return Err(invalid("`style` is composed from style options"));
    }
    if let Some(c) = name.chars().find(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
    }) {
        return Err(invalid(&format!("unexpected character {c:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Direction, Padding, TextAlign};

    #[test]
    fn test_new_node_composes_styles() {
        let node = Node::new(
            "div",
            [("class", "card")],
            StyleOptions::new().padding(Padding::Medium),
        )
        .unwrap();
        assert_eq!(node.tag(), "div");
        assert_eq!(node.attributes().get("class"), Some("card"));
        assert_eq!(node.styles().get("padding"), Some("1rem"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_malformed_tags_rejected() {
        for tag in ["", "Div", "1h", "my tag", "a<b", "p>", "-x", "é"] {
            let err = Node::element(tag).unwrap_err();
            assert!(matches!(err, BuildError::MalformedTag { .. }), "{tag:?}");
        }
        assert!(Node::element("h1").is_ok());
        assert!(Node::element("my-widget").is_ok());
    }

    #[test]
    fn test_invalid_attribute_names_rejected() {
        for name in ["", "on click", "a\"b", "x=y", "style", "STYLE", "a/b"] {
            let err = Node::new("div", [(name, "v")], StyleOptions::new()).unwrap_err();
            assert!(matches!(err, BuildError::InvalidAttribute { .. }), "{name:?}");
        }
        assert!(Node::new("div", [("data-id", "1")], StyleOptions::new()).is_ok());
        assert!(Node::new("svg", [("xml:lang", "en")], StyleOptions::new()).is_ok());
    }

    #[test]
    fn test_attribute_order_and_replacement() {
        let mut attributes = Attributes::new();
        attributes.set("id", "main").unwrap();
        attributes.set("class", "a").unwrap();
        attributes.set("href", "/").unwrap();
        attributes.set("class", "b").unwrap();
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, [("id", "main"), ("class", "b"), ("href", "/")]);

        assert_eq!(attributes.remove("id"), Some("main".to_string()));
        assert_eq!(attributes.remove("id"), None);
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_attach_child_enforces_containment() {
        let mut list = Node::element("ul").unwrap();
        list.attach_child(Node::element("li").unwrap()).unwrap();
        let err = list.attach_child(Node::element("p").unwrap()).unwrap_err();
        assert_eq!(
            err,
            BuildError::StructuralViolation {
                parent: "ul".to_string(),
                child: "p".to_string(),
            }
        );
        assert_eq!(list.children().len(), 1);
    }

    #[test]
    fn test_attach_text_enforces_containment() {
        let mut row = Node::element("tr").unwrap();
        let err = row.attach_text("stray").unwrap_err();
        assert_eq!(
            err,
            BuildError::StructuralViolation {
                parent: "tr".to_string(),
                child: TEXT_CHILD.to_string(),
            }
        );

        let mut br = Node::element("br").unwrap();
        assert!(br.attach_text("x").is_err());
        assert!(br.attach_child(Node::element("span").unwrap()).is_err());
    }

    #[test]
    fn test_attach_attributed_child() {
        let mut nav = Node::element("nav").unwrap();
        nav.attach_attributed_child("a", [("href", "/home"), ("target", "_blank")])
            .unwrap();
        let Child::Element(link) = &nav.children()[0] else {
            panic!("expected element child");
        };
        assert_eq!(link.tag(), "a");
        assert_eq!(link.attributes().get("target"), Some("_blank"));

        let mut span = Node::element("span").unwrap();
        assert!(matches!(
            span.attach_attributed_child("a", [("href", "/")]),
            Err(BuildError::StructuralViolation { .. })
        ));
        assert!(matches!(
            nav.attach_attributed_child("A", [("href", "/")]),
            Err(BuildError::MalformedTag { .. })
        ));
    }

    #[test]
    fn test_children_keep_order() {
        let mut p = Node::element("p").unwrap();
        p.attach_text("one ").unwrap();
        p.attach_child(Node::builder("em").text("two").build().unwrap())
            .unwrap();
        p.attach_text(" three").unwrap();
        assert_eq!(p.text_content(), "one two three");
    }

    #[test]
    fn test_restyle_recomposes() {
        let mut node = Node::new(
            "div",
            std::iter::empty::<(&str, &str)>(),
            StyleOptions::new().text_align(TextAlign::Left),
        )
        .unwrap();
        node.restyle(StyleOptions::new().direction(Direction::FlexRow))
            .unwrap();
        assert!(!node.styles().contains("text-align"));
        assert_eq!(node.styles().get("display"), Some("flex"));
        assert_eq!(node.styles().get("flex-direction"), Some("row"));
        assert_eq!(node.style_options().direction, Some(Direction::FlexRow));
    }

    #[test]
    fn test_failed_restyle_keeps_previous_styles() {
        let mut node = Node::new(
            "div",
            std::iter::empty::<(&str, &str)>(),
            StyleOptions::new().padding(4),
        )
        .unwrap();
        assert!(node.restyle(StyleOptions::new().padding("1px; x: y")).is_err());
        assert_eq!(node.styles().get("padding"), Some("4px"));
    }

    #[test]
    fn test_builder_reports_first_error() {
        let err = Node::builder("ul")
            .child(Node::builder("li").text("ok"))
            .child(Node::builder("div"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::StructuralViolation {
                parent: "ul".to_string(),
                child: "div".to_string(),
            }
        );
    }

    #[test]
    fn test_builder_shorthands() {
        let node = Node::builder("section")
            .id("intro")
            .class("wide")
            .with_style(|s| s.padding(Padding::Large))
            .with_style(|s| s.text_align(TextAlign::Center))
            .build()
            .unwrap();
        let pairs: Vec<_> = node.attributes().iter().collect();
        assert_eq!(pairs, [("id", "intro"), ("class", "wide")]);
        assert_eq!(node.styles().len(), 2);
    }
}
