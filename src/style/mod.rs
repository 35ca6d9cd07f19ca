//! Style system: vocabularies, dimensions, and composition.
//!
//! This module contains:
//! - Closed style vocabularies (Position, Display, Margin, etc.)
//! - [`Dimension`] for spacing and sizing values
//! - [`StyleOptions`] and [`compose`], which turn selections into a [`StyleMap`]

mod compose;
mod dimension;
mod properties;

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

pub use properties::{
    AlignContent, AlignItems, Color, Direction, Display, JustifyContent, Margin, Overflow,
    Padding, Position, Size, TextAlign, VerticalAlign, ZIndex,
};

pub use dimension::Dimension;

pub use compose::{Gate, StyleAxis, StyleMap, StyleOptions, axis_applies, compose, gate};
