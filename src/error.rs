//! Error types for tree construction and rendering.

use thiserror::Error;

/// Errors raised while building a tree.
///
/// All of these signal a mistake in the caller's input. None of them are
/// transient: the caller has to fix the input and construct again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The containment rules do not admit `child` inside `parent`.
    #[error("cannot add <{child}> inside <{parent}>")]
    StructuralViolation { parent: String, child: String },

    /// A dimension or keyword value of an unsupported shape.
    #[error("invalid value {value:?} for {axis}: {reason}")]
    InvalidStyleValue {
        axis: String,
        value: String,
        reason: String,
    },

    /// A tag name that cannot be emitted as-is.
    #[error("malformed tag {tag:?}: {reason}")]
    MalformedTag { tag: String, reason: String },

    /// An attribute name that cannot be emitted as-is.
    #[error("invalid attribute {name:?}: {reason}")]
    InvalidAttribute { name: String, reason: String },
}

/// Errors raised by the serializer.
///
/// Trees built through the construction API never produce these; seeing one
/// means the tree was corrupted after its checks ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("inconsistent tree at <{tag}>: {reason}")]
    InconsistentTree { tag: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;
