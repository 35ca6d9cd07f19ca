//! JSON tree descriptions.
//!
//! A description is a JSON object:
//!
//! ```json
//! {
//!   "tag": "div",
//!   "attributes": { "class": "card" },
//!   "style": { "direction": "flex-column", "padding": "medium" },
//!   "children": [ { "tag": "h1", "children": ["Title"] }, "loose text" ]
//! }
//! ```
//!
//! Every node goes through [`Node::new`] and [`Node::attach_child`], so a
//! description is held to exactly the same rules as the builder API.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::BuildError;
use crate::model::Node;
use crate::style::{
    AlignContent, AlignItems, Color, Dimension, Direction, Display, JustifyContent, Overflow,
    Position, StyleAxis, StyleOptions, TextAlign, VerticalAlign, ZIndex,
};

/// Errors from reading a tree description.
#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("unknown style axis `{0}`")]
    UnknownStyleAxis(String),

    #[error("attribute `{name}` must be a string, number or boolean, got {value}")]
    AttributeValue { name: String, value: String },
}

/// One node of a description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    pub tag: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub style: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<ChildDescription>,
}

/// A child of a description: bare strings are text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChildDescription {
    Text(String),
    Node(Box<NodeDescription>),
}

impl NodeDescription {
    /// Build the described tree.
    pub fn into_node(self) -> Result<Node, DescribeError> {
        let options = style_options(&self.style)?;
        let attributes = self
            .attributes
            .into_iter()
            .map(|(name, value)| {
                let value = attribute_value(&name, value)?;
                Ok((name, value))
            })
            .collect::<Result<Vec<_>, DescribeError>>()?;

        let mut node = Node::new(&self.tag, attributes, options)?;
        for child in self.children {
            match child {
                ChildDescription::Text(text) => node.attach_text(text)?,
                ChildDescription::Node(desc) => node.attach_child(desc.into_node()?)?,
            }
        }
        Ok(node)
    }
}

/// Parse a description from JSON text and build it.
///
/// ```
/// let node = tagtree::describe::from_json_str(
///     r#"{"tag": "p", "style": {"text-align": "center"}, "children": ["Hi"]}"#,
/// )?;
/// assert_eq!(node.to_string(), r#"<p style="text-align: center">Hi</p>"#);
/// # Ok::<(), tagtree::describe::DescribeError>(())
/// ```
pub fn from_json_str(json: &str) -> Result<Node, DescribeError> {
    let desc: NodeDescription = serde_json::from_str(json)?;
    desc.into_node()
}

/// Build a tree from an already parsed JSON value.
pub fn from_value(value: Value) -> Result<Node, DescribeError> {
    let desc: NodeDescription = serde_json::from_value(value)?;
    desc.into_node()
}

fn attribute_value(name: &str, value: Value) -> Result<String, DescribeError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DescribeError::AttributeValue {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Translate a `style` object into [`StyleOptions`].
pub fn style_options(style: &Map<String, Value>) -> Result<StyleOptions, DescribeError> {
    let mut options = StyleOptions::new();
    for (key, value) in style {
        let axis =
            StyleAxis::from_name(key).ok_or_else(|| DescribeError::UnknownStyleAxis(key.clone()))?;
        let property = axis.property();
        match axis {
            StyleAxis::Position => options.position = Some(keyword(property, value, Position::parse)?),
            StyleAxis::ZIndex => options.z_index = Some(keyword(property, value, ZIndex::parse)?),
            StyleAxis::Display => options.display = Some(keyword(property, value, Display::parse)?),
            StyleAxis::TextAlign => {
                options.text_align = Some(keyword(property, value, TextAlign::parse)?)
            }
            StyleAxis::VerticalAlign => {
                options.vertical_align = Some(keyword(property, value, VerticalAlign::parse)?)
            }
            StyleAxis::Direction => {
                options.direction = Some(keyword("direction", value, Direction::parse)?)
            }
            StyleAxis::JustifyContent => {
                options.justify_content = Some(keyword(property, value, JustifyContent::parse)?)
            }
            StyleAxis::AlignItems => {
                options.align_items = Some(keyword(property, value, AlignItems::parse)?)
            }
            StyleAxis::AlignContent => {
                options.align_content = Some(keyword(property, value, AlignContent::parse)?)
            }
            StyleAxis::Overflow => options.overflow = Some(keyword(property, value, Overflow::parse)?),
            StyleAxis::Color => options.color = Some(keyword(property, value, Color::parse)?),
            StyleAxis::BackgroundColor => {
                options.background_color = Some(keyword(property, value, Color::parse)?)
            }
            StyleAxis::Margin
            | StyleAxis::Padding
            | StyleAxis::Width
            | StyleAxis::Height
            | StyleAxis::MinWidth
            | StyleAxis::MaxWidth
            | StyleAxis::MinHeight
            | StyleAxis::MaxHeight => {
                let dimension = Dimension::from_json(axis, value)?;
                let slot = match axis {
                    StyleAxis::Margin => &mut options.margin,
                    StyleAxis::Padding => &mut options.padding,
                    StyleAxis::Width => &mut options.width,
                    StyleAxis::Height => &mut options.height,
                    StyleAxis::MinWidth => &mut options.min_width,
                    StyleAxis::MaxWidth => &mut options.max_width,
                    StyleAxis::MinHeight => &mut options.min_height,
                    _ => &mut options.max_height,
                };
                *slot = Some(dimension);
            }
        }
    }
    Ok(options)
}

fn keyword<T>(axis: &str, value: &Value, parse: fn(&str) -> Option<T>) -> Result<T, BuildError> {
    let invalid = |reason: &str| BuildError::InvalidStyleValue {
        axis: axis.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };
    let text = value.as_str().ok_or_else(|| invalid("expected a string"))?;
    parse(text).ok_or_else(|| invalid("not in the vocabulary"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::elements::{div, h1, p};
    use crate::style::Padding;

    #[test]
    fn test_description_matches_builder() {
        let described = from_value(json!({
            "tag": "div",
            "attributes": {"class": "card", "data-id": 7},
            "style": {"direction": "flex-column", "justify_content": "center", "padding": "medium"},
            "children": [
                {"tag": "h1", "children": ["Title"]},
                {"tag": "p", "children": ["Body"]}
            ]
        }))
        .unwrap();

        let built = div()
            .attribute("class", "card")
            .attribute("data-id", "7")
            .with_style(|s| {
                s.direction(Direction::FlexColumn)
                    .justify_content(JustifyContent::Center)
                    .padding(Padding::Medium)
            })
            .child(h1().text("Title"))
            .child(p().text("Body"))
            .build()
            .unwrap();

        assert_eq!(described, built);
    }

    #[test]
    fn test_dimension_shapes() {
        let node = from_value(json!({
            "tag": "div",
            "style": {"margin": 8, "width": "100%", "max-height": "calc(100vh - 2rem)"}
        }))
        .unwrap();
        assert_eq!(node.styles().get("margin"), Some("8px"));
        assert_eq!(node.styles().get("width"), Some("100%"));
        assert_eq!(node.styles().get("max-height"), Some("calc(100vh - 2rem)"));
    }

    #[test]
    fn test_unknown_axis() {
        let err = from_value(json!({"tag": "div", "style": {"font-size": "large"}})).unwrap_err();
        assert!(matches!(err, DescribeError::UnknownStyleAxis(ref axis) if axis == "font-size"));
    }

    #[test]
    fn test_bad_keyword() {
        let err = from_value(json!({"tag": "div", "style": {"text-align": "diagonal"}})).unwrap_err();
        assert!(matches!(
            err,
            DescribeError::Build(BuildError::InvalidStyleValue { ref axis, .. }) if axis == "text-align"
        ));

        let err = from_value(json!({"tag": "div", "style": {"overflow": 3}})).unwrap_err();
        assert!(matches!(err, DescribeError::Build(BuildError::InvalidStyleValue { .. })));
    }

    #[test]
    fn test_preset_outside_axis_vocabulary() {
        let err = from_value(json!({"tag": "div", "style": {"width": "none"}})).unwrap_err();
        assert!(matches!(
            err,
            DescribeError::Build(BuildError::InvalidStyleValue { ref axis, .. }) if axis == "width"
        ));

        let node = from_value(json!({"tag": "div", "style": {"max-width": "none"}})).unwrap();
        assert_eq!(node.styles().get("max-width"), Some("none"));
    }

    #[test]
    fn test_raw_breakout_rejected() {
        let err = from_value(json!({"tag": "div", "style": {"width": "1px; color: red"}})).unwrap_err();
        assert!(matches!(err, DescribeError::Build(BuildError::InvalidStyleValue { .. })));

        let err = from_value(json!({"tag": "div", "style": {"margin": "calc(1px", "padding": 4}}))
            .unwrap_err();
        assert!(matches!(err, DescribeError::Build(BuildError::InvalidStyleValue { .. })));
    }

    #[test]
    fn test_structure_enforced() {
        let err = from_json_str(r#"{"tag": "ul", "children": [{"tag": "p"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            DescribeError::Build(BuildError::StructuralViolation { .. })
        ));
    }

    #[test]
    fn test_attribute_shapes() {
        let err = from_value(json!({"tag": "a", "attributes": {"href": null}})).unwrap_err();
        assert!(matches!(err, DescribeError::AttributeValue { ref name, .. } if name == "href"));

        let err = from_value(json!({"tag": "div", "attributes": {"style": "color: red"}})).unwrap_err();
        assert!(matches!(err, DescribeError::Build(BuildError::InvalidAttribute { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json_str("{"), Err(DescribeError::Json(_))));
        assert!(matches!(
            from_json_str(r#"{"tag": "p", "colour": "red"}"#),
            Err(DescribeError::Json(_))
        ));
    }
}
