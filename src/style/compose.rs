//! Style composition: semantic options in, flat property map out.
//!
//! Every axis is applied unconditionally except those whose [`Gate`] says
//! otherwise. Gates are looked up in one table ([`gate`]) keyed by axis, so
//! the applicability rules live in a single place.

use log::debug;

use super::ToCss;
use super::dimension::Dimension;
use super::properties::{
    AlignContent, AlignItems, Color, Direction, Display, JustifyContent, Overflow, Position,
    TextAlign, VerticalAlign, ZIndex,
};
use crate::error::Result;
use crate::model::{Category, classify};

/// One semantic styling dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAxis {
    Position,
    ZIndex,
    Display,
    TextAlign,
    VerticalAlign,
    Margin,
    Padding,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    Direction,
    JustifyContent,
    AlignItems,
    AlignContent,
    Overflow,
    Color,
    BackgroundColor,
}

impl StyleAxis {
    pub const ALL: &'static [StyleAxis] = &[
        StyleAxis::Position,
        StyleAxis::ZIndex,
        StyleAxis::Display,
        StyleAxis::TextAlign,
        StyleAxis::VerticalAlign,
        StyleAxis::Margin,
        StyleAxis::Padding,
        StyleAxis::Width,
        StyleAxis::Height,
        StyleAxis::MinWidth,
        StyleAxis::MaxWidth,
        StyleAxis::MinHeight,
        StyleAxis::MaxHeight,
        StyleAxis::Direction,
        StyleAxis::JustifyContent,
        StyleAxis::AlignItems,
        StyleAxis::AlignContent,
        StyleAxis::Overflow,
        StyleAxis::Color,
        StyleAxis::BackgroundColor,
    ];

    /// The CSS property this axis writes. `Direction` writes `display` plus
    /// a derived property.
    pub fn property(&self) -> &'static str {
        match self {
            StyleAxis::Position => "position",
            StyleAxis::ZIndex => "z-index",
            StyleAxis::Display | StyleAxis::Direction => "display",
            StyleAxis::TextAlign => "text-align",
            StyleAxis::VerticalAlign => "vertical-align",
            StyleAxis::Margin => "margin",
            StyleAxis::Padding => "padding",
            StyleAxis::Width => "width",
            StyleAxis::Height => "height",
            StyleAxis::MinWidth => "min-width",
            StyleAxis::MaxWidth => "max-width",
            StyleAxis::MinHeight => "min-height",
            StyleAxis::MaxHeight => "max-height",
            StyleAxis::JustifyContent => "justify-content",
            StyleAxis::AlignItems => "align-items",
            StyleAxis::AlignContent => "align-content",
            StyleAxis::Overflow => "overflow",
            StyleAxis::Color => "color",
            StyleAxis::BackgroundColor => "background-color",
        }
    }

    /// Look up an axis by name (`text_align`, `text-align` or `TextAlign`).
    pub fn from_name(s: &str) -> Option<Self> {
        let folded: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        StyleAxis::ALL
            .iter()
            .copied()
            .find(|axis| format!("{axis:?}").eq_ignore_ascii_case(&folded))
    }
}

/// Applicability rule for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Applies to every tag.
    Always,
    /// Applies only when the tag's category is listed.
    Categories(&'static [Category]),
    /// Applies only when the composed `display` is a flex or grid mode.
    FlexOrGrid,
}

const TEXT_ALIGN_CATEGORIES: &[Category] = &[
    Category::BlockContainer,
    Category::TableCell,
    Category::TableRow,
    Category::List,
    Category::FormRoot,
    Category::DocumentHead,
    Category::DocumentBody,
];

const VERTICAL_ALIGN_CATEGORIES: &[Category] =
    &[Category::Inline, Category::TableCell, Category::FormControl];

const OVERFLOW_CATEGORIES: &[Category] = &[Category::BlockContainer];

/// The gating table.
pub fn gate(axis: StyleAxis) -> Gate {
    match axis {
        StyleAxis::TextAlign => Gate::Categories(TEXT_ALIGN_CATEGORIES),
        StyleAxis::VerticalAlign => Gate::Categories(VERTICAL_ALIGN_CATEGORIES),
        StyleAxis::Overflow => Gate::Categories(OVERFLOW_CATEGORIES),
        StyleAxis::JustifyContent | StyleAxis::AlignItems | StyleAxis::AlignContent => {
            Gate::FlexOrGrid
        }
        _ => Gate::Always,
    }
}

/// Whether `axis` applies to a node of `category` whose composed display is
/// `display`.
pub fn axis_applies(axis: StyleAxis, category: Category, display: Option<Display>) -> bool {
    match gate(axis) {
        Gate::Always => true,
        Gate::Categories(allowed) => allowed.contains(&category),
        Gate::FlexOrGrid => display.is_some_and(|d| d.is_flex_or_grid()),
    }
}

/// Requested style selections, at most one per axis.
///
/// # Example
///
/// ```
/// use tagtree::style::{Direction, JustifyContent, Padding, StyleOptions};
///
/// let options = StyleOptions::new()
///     .direction(Direction::FlexColumn)
///     .justify_content(JustifyContent::Center)
///     .padding(Padding::Medium);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOptions {
    pub position: Option<Position>,
    pub z_index: Option<ZIndex>,
    pub display: Option<Display>,
    pub text_align: Option<TextAlign>,
    pub vertical_align: Option<VerticalAlign>,
    pub margin: Option<Dimension>,
    pub padding: Option<Dimension>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub direction: Option<Direction>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub align_content: Option<AlignContent>,
    pub overflow: Option<Overflow>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

macro_rules! keyword_setter {
    ($field:ident, $type:ty) => {
        pub fn $field(mut self, value: $type) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

macro_rules! dimension_setter {
    ($field:ident) => {
        pub fn $field(mut self, value: impl Into<Dimension>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

impl StyleOptions {
    /// No selections.
    pub fn new() -> Self {
        Self::default()
    }

    keyword_setter!(position, Position);
    keyword_setter!(z_index, ZIndex);
    keyword_setter!(display, Display);
    keyword_setter!(text_align, TextAlign);
    keyword_setter!(vertical_align, VerticalAlign);
    keyword_setter!(direction, Direction);
    keyword_setter!(justify_content, JustifyContent);
    keyword_setter!(align_items, AlignItems);
    keyword_setter!(align_content, AlignContent);
    keyword_setter!(overflow, Overflow);
    keyword_setter!(color, Color);
    keyword_setter!(background_color, Color);

    dimension_setter!(margin);
    dimension_setter!(padding);
    dimension_setter!(width);
    dimension_setter!(height);
    dimension_setter!(min_width);
    dimension_setter!(max_width);
    dimension_setter!(min_height);
    dimension_setter!(max_height);

    /// Whether no axis has a selection.
    pub fn is_empty(&self) -> bool {
        *self == StyleOptions::default()
    }
}

/// Composed style properties of a node, in emission order.
///
/// Only [`compose`] builds these; property names are always canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(&'static str, String)>,
}

impl StyleMap {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }
}

impl ToCss for StyleMap {
    /// Writes `prop: value; prop: value` (the body of a style attribute).
    fn to_css(&self, buf: &mut String) {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                buf.push_str("; ");
            }
            buf.push_str(name);
            buf.push_str(": ");
            buf.push_str(value);
        }
    }
}

/// Compose the style map of a `tag` node from `options`.
///
/// Deterministic: the same inputs always produce the same map, in the same
/// order. Fails only on an invalid dimension value, or a preset set on an
/// axis outside its vocabulary.
pub fn compose(tag: &str, options: &StyleOptions) -> Result<StyleMap> {
    let category = classify(tag);
    let mut map = StyleMap::default();

    // Direction overrides a raw display selection, and the flex/grid gates
    // below read the overridden value.
    let display = options
        .direction
        .map(|d| d.display())
        .or(options.display);

    let mut keyword = |axis: StyleAxis, value: Option<&'static str>| {
        let Some(value) = value else {
            return;
        };
        if axis_applies(axis, category, display) {
            map.set(axis.property(), value);
        } else {
            debug!(
                "<{tag}>: dropping {}: {value} (not applicable to {category:?})",
                axis.property()
            );
        }
    };

    keyword(StyleAxis::Position, options.position.map(|v| v.as_str()));
    keyword(StyleAxis::ZIndex, options.z_index.map(|v| v.as_str()));
    keyword(StyleAxis::Display, display.map(|v| v.as_str()));
    keyword(StyleAxis::TextAlign, options.text_align.map(|v| v.as_str()));
    keyword(
        StyleAxis::VerticalAlign,
        options.vertical_align.map(|v| v.as_str()),
    );

    let dimensions = [
        (StyleAxis::Margin, &options.margin),
        (StyleAxis::Padding, &options.padding),
        (StyleAxis::Width, &options.width),
        (StyleAxis::Height, &options.height),
        (StyleAxis::MinWidth, &options.min_width),
        (StyleAxis::MaxWidth, &options.max_width),
        (StyleAxis::MinHeight, &options.min_height),
        (StyleAxis::MaxHeight, &options.max_height),
    ];
    for (axis, value) in dimensions {
        if let Some(dimension) = value {
            map.set(axis.property(), dimension.resolve(axis)?);
        }
    }

    if let Some(direction) = options.direction {
        if let Some(flow) = direction.flex_direction() {
            map.set("flex-direction", flow);
        }
        if let Some(flow) = direction.grid_auto_flow() {
            map.set("grid-auto-flow", flow);
        }
    }

    let mut keyword = |axis: StyleAxis, value: Option<&'static str>| {
        let Some(value) = value else {
            return;
        };
        if axis_applies(axis, category, display) {
            map.set(axis.property(), value);
        } else {
            debug!(
                "<{tag}>: dropping {}: {value} (display is {:?})",
                axis.property(),
                display.map(|d| d.as_str())
            );
        }
    };

    keyword(
        StyleAxis::JustifyContent,
        options.justify_content.map(|v| v.as_str()),
    );
    keyword(StyleAxis::AlignItems, options.align_items.map(|v| v.as_str()));
    keyword(
        StyleAxis::AlignContent,
        options.align_content.map(|v| v.as_str()),
    );
    keyword(StyleAxis::Overflow, options.overflow.map(|v| v.as_str()));
    keyword(StyleAxis::Color, options.color.map(|v| v.as_str()));
    keyword(
        StyleAxis::BackgroundColor,
        options.background_color.map(|v| v.as_str()),
    );

    Ok(map)
}
