//! Model construction errors.
//!
//! Rendering itself never fails; the only checked surface is building a
//! [`Method`](crate::Method) whose attribute set violates an invariant.

use thiserror::Error;

use crate::MethodKind;

/// Result type alias for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;

/// A method description that violates an attribute invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// `throws` and `rethrows` on the same method.
    #[error("method `{method}` cannot be both `throws` and `rethrows`")]
    ConflictingEffects { method: String },

    /// `init?` and `init!` on the same initializer.
    #[error("initializer `{method}` cannot be both `init?` and `init!`")]
    ConflictingFailability { method: String },

    /// An initializer-only attribute on a non-initializer.
    #[error("`{attribute}` is only valid on initializers, but `{method}` is {kind}")]
    InitializerOnlyAttribute {
        method: String,
        attribute: &'static str,
        kind: MethodKind,
    },

    /// A scope attribute that disagrees with the method kind.
    #[error("method `{method}` is {kind} but is marked `{attribute}`")]
    ScopeMismatch {
        method: String,
        attribute: &'static str,
        kind: MethodKind,
    },
}
