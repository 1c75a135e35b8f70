//! Method and parameter descriptions.
//!
//! Produced once by the extraction stage and read by every renderer. All
//! fields are private; construction goes through [`MethodBuilder`], which
//! enforces the attribute invariants.

use std::fmt;

use crate::error::{ModelError, Result};
use crate::Attributes;

/// Keyword every initializer is declared with.
pub const INITIALIZER_NAME: &str = "init";

/// What kind of member a method is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MethodKind {
    #[default]
    Instance,
    Static,
    /// `class func`, overridable on the type.
    Class,
    Initializer,
}

impl MethodKind {
    /// Scope attribute implied by this kind, if any.
    pub const fn scope_attribute(self) -> Attributes {
        match self {
            MethodKind::Static => Attributes::STATIC,
            MethodKind::Class => Attributes::CLASS_SCOPE,
            MethodKind::Instance | MethodKind::Initializer => Attributes::empty(),
        }
    }

    #[inline]
    pub const fn is_type_scoped(self) -> bool {
        matches!(self, MethodKind::Static | MethodKind::Class)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MethodKind::Instance => "an instance method",
            MethodKind::Static => "a static method",
            MethodKind::Class => "a class method",
            MethodKind::Initializer => "an initializer",
        })
    }
}

/// A conditional-compilation guard wrapping a method (`#if DEBUG`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompilationDirective {
    declaration: String,
}

impl CompilationDirective {
    /// Closing line matching any opening guard.
    pub const END: &'static str = "#endif";

    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
        }
    }

    /// The opening guard line, e.g. `#if os(iOS)`.
    pub fn declaration(&self) -> &str {
        &self.declaration
    }
}

/// A single method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    argument_label: Option<String>,
    type_name: String,
    attributes: Attributes,
}

impl Parameter {
    /// Create an unlabeled parameter (`_ name: Type`).
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument_label: None,
            type_name: type_name.into(),
            attributes: Attributes::empty(),
        }
    }

    /// Create a parameter whose argument label equals its name (`name: Type`).
    pub fn labeled(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            argument_label: Some(name.clone()),
            name,
            type_name: type_name.into(),
            attributes: Attributes::empty(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.argument_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes |= attributes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument_label(&self) -> Option<&str> {
        self.argument_label.as_deref()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[inline]
    pub fn is_variadic(&self) -> bool {
        self.attributes.is_variadic()
    }
}

/// A method, initializer or operator on a mockable type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method {
    short_name: String,
    parameters: Vec<Parameter>,
    attributes: Attributes,
    generic_type_parameters: Vec<String>,
    where_clauses: Vec<String>,
    return_type_name: String,
    kind: MethodKind,
    is_overridable: bool,
    compilation_directives: Vec<CompilationDirective>,
    declaration_attributes: Vec<String>,
}

impl Method {
    /// Start describing a method named `short_name`.
    pub fn builder(short_name: impl Into<String>) -> MethodBuilder {
        MethodBuilder::new(short_name.into())
    }

    /// Start describing an initializer.
    pub fn initializer() -> MethodBuilder {
        MethodBuilder::new(INITIALIZER_NAME.to_owned()).kind(MethodKind::Initializer)
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn generic_type_parameters(&self) -> &[String] {
        &self.generic_type_parameters
    }

    pub fn where_clauses(&self) -> &[String] {
        &self.where_clauses
    }

    pub fn return_type_name(&self) -> &str {
        &self.return_type_name
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn is_overridable(&self) -> bool {
        self.is_overridable
    }

    pub fn compilation_directives(&self) -> &[CompilationDirective] {
        &self.compilation_directives
    }

    /// Declaration attributes (already filtered) forwarded onto every rendering.
    pub fn declaration_attributes(&self) -> &[String] {
        &self.declaration_attributes
    }

    #[inline]
    pub fn is_initializer(&self) -> bool {
        self.kind == MethodKind::Initializer
    }

    #[inline]
    pub fn is_type_scoped(&self) -> bool {
        self.kind.is_type_scoped()
    }

    /// Check if any parameter is variadic.
    pub fn has_variadic_parameter(&self) -> bool {
        self.parameters.iter().any(Parameter::is_variadic)
    }
}

/// Builder for [`Method`].
#[derive(Clone, Debug)]
#[must_use]
pub struct MethodBuilder {
    method: Method,
}

impl MethodBuilder {
    fn new(short_name: String) -> Self {
        Self {
            method: Method {
                short_name,
                parameters: Vec::new(),
                attributes: Attributes::empty(),
                generic_type_parameters: Vec::new(),
                where_clauses: Vec::new(),
                return_type_name: "Void".to_owned(),
                kind: MethodKind::Instance,
                is_overridable: false,
                compilation_directives: Vec::new(),
                declaration_attributes: Vec::new(),
            },
        }
    }

    pub fn kind(mut self, kind: MethodKind) -> Self {
        self.method.kind = kind;
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.method.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.method.parameters.extend(parameters);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.method.attributes |= attributes;
        self
    }

    /// Add a generic parameter declaration, e.g. `T: Equatable`.
    pub fn generic_parameter(mut self, declaration: impl Into<String>) -> Self {
        self.method.generic_type_parameters.push(declaration.into());
        self
    }

    /// Add a `where` constraint, e.g. `T.Element == Int`.
    pub fn where_clause(mut self, clause: impl Into<String>) -> Self {
        self.method.where_clauses.push(clause.into());
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.method.return_type_name = type_name.into();
        self
    }

    pub fn overridable(mut self, is_overridable: bool) -> Self {
        self.method.is_overridable = is_overridable;
        self
    }

    pub fn compilation_directive(mut self, declaration: impl Into<String>) -> Self {
        self.method
            .compilation_directives
            .push(CompilationDirective::new(declaration));
        self
    }

    pub fn declaration_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.method.declaration_attributes.push(attribute.into());
        self
    }

    /// Validate the attribute invariants and produce the method.
    pub fn build(self) -> Result<Method> {
        let mut method = self.method;
        let attrs = method.attributes;
        let kind = method.kind;

        if attrs.contains(Attributes::THROWS | Attributes::RETHROWS) {
            return Err(ModelError::ConflictingEffects {
                method: method.short_name,
            });
        }
        if attrs.contains(Attributes::FAILABLE | Attributes::UNWRAPPED_FAILABLE) {
            return Err(ModelError::ConflictingFailability {
                method: method.short_name,
            });
        }
        if kind != MethodKind::Initializer {
            let misplaced = attrs & Attributes::INITIALIZER_ONLY;
            if let Some(attribute) = misplaced.iter().next() {
                return Err(ModelError::InitializerOnlyAttribute {
                    method: method.short_name,
                    attribute: attribute.keyword(),
                    kind,
                });
            }
        }

        let implied = kind.scope_attribute();
        let declared = attrs & Attributes::TYPE_SCOPE;
        if let Some(attribute) = (declared - implied).iter().next() {
            return Err(ModelError::ScopeMismatch {
                method: method.short_name,
                attribute: attribute.keyword(),
                kind,
            });
        }
        method.attributes |= implied;

        Ok(method)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on invalid models"
)]
