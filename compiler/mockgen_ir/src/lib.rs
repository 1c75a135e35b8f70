//! Mockgen IR - Method Model for Mock Generation
//!
//! Data consumed by the rendering engine, already resolved by an upstream
//! extraction stage:
//! - [`Attributes`]: flag set for methods and parameters
//! - [`Method`] / [`Parameter`]: immutable method descriptions
//! - [`MockingContext`]: read-only view of the enclosing mockable type
//! - [`syntax`]: spelling helpers for printable type names and identifiers
//!
//! # Design Philosophy
//!
//! - **Validated once**: [`MethodBuilder::build`] checks attribute invariants,
//!   renderers never re-check them
//! - **Read-only sharing**: a context is borrowed by every method rendering of
//!   its type and never mutated

mod attributes;
mod context;
pub mod error;
mod method;
pub mod syntax;

pub use attributes::Attributes;
pub use context::{MockContext, MockableKind, MockingContext, DEFAULT_ABSTRACT_MOCK_PROTOCOL};
pub use error::{ModelError, Result};
pub use method::{
    CompilationDirective, Method, MethodBuilder, MethodKind, Parameter, INITIALIZER_NAME,
};
