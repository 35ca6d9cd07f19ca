//! Style vocabularies and the enum_property! macro.
//!
//! Every vocabulary is a closed enum whose variants resolve to exactly one
//! canonical CSS token. Nothing outside these tables can reach a style
//! declaration through a keyword axis.

use super::ToCss;

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Overflow behavior.
///     pub enum Overflow {
///         Visible => "visible",
///         Hidden => "hidden",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the canonical CSS token for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a canonical CSS token into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Parse a variant name, ignoring case, `-` and `_`
            /// (`"x-large"`, `"X_LARGE"` and `"XLarge"` all match `XLarge`).
            pub fn from_name(s: &str) -> Option<Self> {
                let folded: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
                $(
                    if stringify!($variant).eq_ignore_ascii_case(&folded) {
                        return Some($name::$variant);
                    }
                )*
                None
            }

            /// Parse either a canonical token or a variant name.
            pub fn parse(s: &str) -> Option<Self> {
                Self::from_css(s).or_else(|| Self::from_name(s))
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

enum_property! {
    /// CSS positioning scheme.
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

enum_property! {
    /// Stacking levels for `z-index`.
    pub enum ZIndex {
        Auto => "auto",
        Behind => "-1",
        Base => "0",
        Raised => "10",
        Dropdown => "100",
        Overlay => "1000",
    }
}

enum_property! {
    /// Display mode.
    pub enum Display {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        None => "none",
        Flex => "flex",
        Grid => "grid",
        InlineFlex => "inline-flex",
        InlineGrid => "inline-grid",
        Table => "table",
        TableCell => "table-cell",
        TableRow => "table-row",
    }
}

impl Display {
    /// Whether this display mode lays children out as a flex or grid container.
    #[inline]
    pub fn is_flex_or_grid(&self) -> bool {
        matches!(
            self,
            Display::Flex | Display::Grid | Display::InlineFlex | Display::InlineGrid
        )
    }
}

enum_property! {
    /// Horizontal text alignment.
    pub enum TextAlign {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
        Start => "start",
        End => "end",
    }
}

enum_property! {
    /// Vertical alignment for inline and table-cell elements.
    pub enum VerticalAlign {
        Baseline => "baseline",
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
        TextTop => "text-top",
        TextBottom => "text-bottom",
        Sub => "sub",
        Super => "super",
    }
}

enum_property! {
    /// Main-axis distribution inside flex and grid containers.
    pub enum JustifyContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
    }
}

enum_property! {
    /// Cross-axis alignment of items inside flex and grid containers.
    pub enum AlignItems {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        SelfStart => "self-start",
        SelfEnd => "self-end",
    }
}

enum_property! {
    /// Distribution of lines inside multi-line flex and grid containers.
    pub enum AlignContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        Stretch => "stretch",
    }
}

enum_property! {
    /// Margin scale.
    pub enum Margin {
        Auto => "auto",
        Zero => "0",
        Small => "0.5rem",
        Medium => "1rem",
        Large => "2rem",
        XLarge => "4rem",
    }
}

enum_property! {
    /// Padding scale.
    pub enum Padding {
        None => "0",
        Small => "0.5rem",
        Medium => "1rem",
        Large => "2rem",
        XLarge => "4rem",
    }
}

enum_property! {
    /// Width and height presets, shared by the min/max variants.
    pub enum Size {
        Auto => "auto",
        Zero => "0",
        Full => "100%",
        Half => "50%",
        FitContent => "fit-content",
        MinContent => "min-content",
        MaxContent => "max-content",
        /// Only meaningful for `max-width` and `max-height`.
        None => "none",
    }
}

enum_property! {
    /// Content overflow behavior.
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
        Scroll => "scroll",
        Auto => "auto",
        Clip => "clip",
    }
}

enum_property! {
    /// Named colors for `color` and `background-color`.
    pub enum Color {
        Black => "black",
        White => "white",
        Red => "red",
        Green => "green",
        Blue => "blue",
        Yellow => "yellow",
        Transparent => "transparent",
        CurrentColor => "currentcolor",
    }
}

enum_property! {
    /// Layout direction.
    ///
    /// Not a CSS property on its own: selecting a direction turns the node
    /// into a flex or grid container (see [`Direction::display`]).
    pub enum Direction {
        Flex => "flex",
        FlexRow => "flex-row",
        FlexColumn => "flex-column",
        FlexRowReverse => "flex-row-reverse",
        FlexColumnReverse => "flex-column-reverse",
        Grid => "grid",
        GridCols => "grid-cols",
        GridRows => "grid-rows",
        GridDense => "grid-dense",
    }
}

impl Direction {
    /// Whether this is one of the flex-family directions.
    #[inline]
    pub fn is_flex(&self) -> bool {
        matches!(
            self,
            Direction::Flex
                | Direction::FlexRow
                | Direction::FlexColumn
                | Direction::FlexRowReverse
                | Direction::FlexColumnReverse
        )
    }

    /// The display mode implied by this direction.
    pub fn display(&self) -> Display {
        if self.is_flex() {
            Display::Flex
        } else {
            Display::Grid
        }
    }

    /// Value for `flex-direction`, if this direction sets one.
    ///
    /// The base `flex` direction leaves the browser default in place.
    pub fn flex_direction(&self) -> Option<&'static str> {
        match self {
            Direction::FlexRow => Some("row"),
            Direction::FlexColumn => Some("column"),
            Direction::FlexRowReverse => Some("row-reverse"),
            Direction::FlexColumnReverse => Some("column-reverse"),
            _ => None,
        }
    }

    /// Value for `grid-auto-flow`, if this direction sets one.
    pub fn grid_auto_flow(&self) -> Option<&'static str> {
        match self {
            Direction::GridCols => Some("column"),
            Direction::GridRows => Some("row"),
            Direction::GridDense => Some("dense"),
            _ => None,
        }
    }
}
