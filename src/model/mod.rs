//! The tree model: nodes, structural categories, and containment rules.

mod category;
mod containment;
pub mod elements;
mod node;

pub use category::{Category, classify, is_void, preserves_whitespace};
pub use containment::{can_contain, can_contain_text};
pub use node::{Attributes, BuilderChild, Child, Node, NodeBuilder, TEXT_CHILD};

pub(crate) use node::validate_tag;
