//! Free-form lengths for spacing and sizing axes.
//!
//! Margin, padding, and the width/height family accept three shapes:
//! a preset from a vocabulary, a bare number of pixels, or a raw CSS value
//! used verbatim. The shape is fixed once, when the value enters
//! [`StyleOptions`](super::StyleOptions), and resolved once by the composer
//! against the axis it was set on.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};

use super::compose::StyleAxis;
use super::properties::{Margin, Padding, Size};
use crate::error::{BuildError, Result};

/// A spacing or sizing value.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Preset for the `margin` axis.
    Margin(Margin),
    /// Preset for the `padding` axis.
    Padding(Padding),
    /// Preset for the width/height family.
    Size(Size),
    /// Pixel length; `16` renders as `16px`.
    Pixels(f64),
    /// Raw CSS value, emitted verbatim once validated.
    Raw(String),
}

impl Dimension {
    /// Resolve to the CSS value string for `axis`.
    ///
    /// A preset must belong to the axis's vocabulary: margin presets only on
    /// `margin`, padding presets only on `padding`, sizes only on the
    /// width/height family (`none` on the max axes alone, `auto` never on
    /// them). Negative pixels are only valid for margins.
    pub fn resolve(&self, axis: StyleAxis) -> Result<String> {
        let property = axis.property();
        match self {
            Dimension::Margin(margin) => match axis {
                StyleAxis::Margin => Ok(margin.as_str().to_string()),
                _ => Err(invalid(property, margin.as_str(), "margin preset")),
            },
            Dimension::Padding(padding) => match axis {
                StyleAxis::Padding => Ok(padding.as_str().to_string()),
                _ => Err(invalid(property, padding.as_str(), "padding preset")),
            },
            Dimension::Size(size) => {
                let max_axis = matches!(axis, StyleAxis::MaxWidth | StyleAxis::MaxHeight);
                match (size, is_size_axis(axis)) {
                    (_, false) => Err(invalid(property, size.as_str(), "size preset")),
                    (Size::None, true) if !max_axis => {
                        Err(invalid(property, size.as_str(), "`none` only applies to max-width and max-height"))
                    }
                    (Size::Auto, true) if max_axis => {
                        Err(invalid(property, size.as_str(), "`auto` does not apply to max-width or max-height"))
                    }
                    _ => Ok(size.as_str().to_string()),
                }
            }
            Dimension::Pixels(px) => {
                if !px.is_finite() {
                    return Err(invalid(property, &px.to_string(), "not a finite number"));
                }
                if *px < 0.0 && axis != StyleAxis::Margin {
                    return Err(invalid(property, &px.to_string(), "negative length"));
                }
                Ok(format!("{px}px"))
            }
            Dimension::Raw(raw) => {
                validate_raw(property, raw)?;
                Ok(raw.trim().to_string())
            }
        }
    }
}

fn is_size_axis(axis: StyleAxis) -> bool {
    matches!(
        axis,
        StyleAxis::Width
            | StyleAxis::Height
            | StyleAxis::MinWidth
            | StyleAxis::MaxWidth
            | StyleAxis::MinHeight
            | StyleAxis::MaxHeight
    )
}

impl From<Margin> for Dimension {
    fn from(value: Margin) -> Self {
        Dimension::Margin(value)
    }
}

impl From<Padding> for Dimension {
    fn from(value: Padding) -> Self {
        Dimension::Padding(value)
    }
}

impl From<Size> for Dimension {
    fn from(value: Size) -> Self {
        Dimension::Size(value)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Pixels(value)
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Pixels(f64::from(value))
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Pixels(f64::from(value))
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Pixels(f64::from(value))
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Raw(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Raw(value)
    }
}

#[cfg(feature = "cli")]
impl Dimension {
    /// Convert a JSON value from a tree description for `axis`.
    ///
    /// Numbers become pixels. Strings naming a preset of the axis's
    /// vocabulary (canonical token or variant name) become that preset,
    /// anything else stays raw. All other JSON shapes are rejected.
    pub fn from_json(axis: StyleAxis, value: &serde_json::Value) -> Result<Self> {
        let property = axis.property();
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Dimension::Pixels)
                .ok_or_else(|| invalid(property, &n.to_string(), "number out of range")),
            serde_json::Value::String(s) => {
                let preset = match axis {
                    StyleAxis::Margin => Margin::parse(s).map(Dimension::Margin),
                    StyleAxis::Padding => Padding::parse(s).map(Dimension::Padding),
                    _ if is_size_axis(axis) => Size::parse(s).map(Dimension::Size),
                    _ => None,
                };
                Ok(preset.unwrap_or_else(|| Dimension::Raw(s.clone())))
            }
            other => Err(invalid(
                property,
                &other.to_string(),
                "expected a preset, a number, or a string",
            )),
        }
    }
}

/// Check that a raw value stays inside a single declaration value.
///
/// The style attribute is `prop: value; prop: value`, so a raw value must not
/// end its declaration, open a rule block, or leave a string, comment, url or
/// bracket open for the next declaration to fall into.
fn validate_raw(axis: &str, raw: &str) -> Result<()> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(invalid(axis, raw, "empty value"));
    }
    if raw.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        return Err(invalid(axis, raw, "control character"));
    }

    // The `;` after the value has to come back as the last top-level token.
    // If anything swallows it, the value was still open.
    let source = format!("{value};");
    let mut input = ParserInput::new(&source);
    let mut parser = Parser::new(&mut input);
    scan_value(&mut parser, true).map_err(|reason| invalid(axis, raw, reason))
}

fn scan_value(parser: &mut Parser<'_, '_>, top_level: bool) -> std::result::Result<(), &'static str> {
    loop {
        let token = match parser.next_including_whitespace_and_comments().cloned() {
            Ok(token) => token,
            Err(_) if top_level => return Err("unterminated string, comment, url or bracket"),
            Err(_) => return Ok(()),
        };
        let reason = match token {
            Token::Semicolon if top_level => {
                return if parser.is_exhausted() {
                    Ok(())
                } else {
                    Err("unexpected `;`")
                };
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser
                    .parse_nested_block(|inner| {
                        scan_value(inner, false).map_err(|reason| inner.new_custom_error(reason))
                    })
                    .map_err(|e: ParseError<'_, &'static str>| match e.kind {
                        ParseErrorKind::Custom(reason) => reason,
                        ParseErrorKind::Basic(_) => "malformed bracket",
                    })?;
                continue;
            }
            Token::Semicolon => "unexpected `;` inside brackets",
            Token::Colon if top_level => "unexpected `:`",
            Token::CurlyBracketBlock | Token::CloseCurlyBracket => "unexpected block",
            Token::CloseParenthesis | Token::CloseSquareBracket => "unbalanced bracket",
            Token::BadString(_) => "unterminated string",
            Token::BadUrl(_) => "malformed url",
            Token::Delim('!') => "unexpected `!`",
            Token::CDO | Token::CDC => "unexpected comment delimiter",
            _ => continue,
        };
        return Err(reason);
    }
}

fn invalid(axis: &str, value: &str, reason: &str) -> BuildError {
    BuildError::InvalidStyleValue {
        axis: axis.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
