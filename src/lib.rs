//! # tagtree
//!
//! A declarative HTML tree builder with a typed style vocabulary.
//!
//! ## Features
//!
//! - Closed vocabularies for layout, spacing and alignment styles
//! - Style composition gated by element category
//! - Containment rules enforced when children are attached
//! - Compact and pretty serialization with pluggable escaping
//!
//! ## Quick Start
//!
//! ```
//! use tagtree::elements::{div, h1, p};
//! use tagtree::style::{Direction, JustifyContent, Padding, StyleOptions};
//!
//! let card = div()
//!     .class("card")
//!     .style(
//!         StyleOptions::new()
//!             .direction(Direction::FlexColumn)
//!             .justify_content(JustifyContent::Center)
//!             .padding(Padding::Medium),
//!     )
//!     .child(h1().text("Title"))
//!     .child(p().text("Body"))
//!     .build()?;
//!
//! assert_eq!(
//!     tagtree::render(&card)?,
//!     "<div class=\"card\" style=\"display: flex; padding: 1rem; \
//!      flex-direction: column; justify-content: center\">\
//!      <h1>Title</h1><p>Body</p></div>"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Structure
//!
//! Invalid trees cannot be built:
//!
//! ```
//! use tagtree::elements::{li, p, ul};
//! use tagtree::BuildError;
//!
//! let err = ul().child(p()).build().unwrap_err();
//! assert_eq!(
//!     err,
//!     BuildError::StructuralViolation {
//!         parent: "ul".into(),
//!         child: "p".into()
//!     }
//! );
//! assert!(ul().child(li().text("ok")).build().is_ok());
//! ```

#[cfg(feature = "cli")]
pub mod describe;
pub mod error;
pub mod export;
pub mod model;
pub mod style;

pub use error::{BuildError, RenderError, Result};
pub use export::{HtmlSerializer, render, render_document, render_pretty};
pub use model::elements;
pub use model::{Attributes, Category, Child, Node, NodeBuilder, can_contain, classify};
pub use style::{StyleOptions, compose};
