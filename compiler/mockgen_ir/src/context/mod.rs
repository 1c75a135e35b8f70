//! Enclosing-type context.
//!
//! Every method of a mockable type is rendered against the same read-only
//! context. The context answers questions about the type as a whole (its
//! generated mock name, whether it is class-bound) and specializes raw type
//! names written in terms of the type's generic parameters.

use rustc_hash::FxHashMap;

/// Whether the mocked type is a class or a protocol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MockableKind {
    Class,
    Protocol,
}

/// Read-only view of the enclosing mockable type.
///
/// The extraction stage may implement this directly; [`MockContext`] is the
/// stock implementation backed by a generic substitution table.
pub trait MockingContext {
    /// Name of the type being mocked, e.g. `Bird`.
    fn mockable_type_name(&self) -> &str;

    fn mockable_kind(&self) -> MockableKind;

    /// Fully-qualified generated mock type, e.g. `BirdMock`.
    fn scoped_mock_type_name(&self) -> &str;

    /// Protocol every generated mock conforms to.
    fn abstract_mock_protocol_name(&self) -> &str;

    /// Class a protocol is constrained to (`protocol P: NSObject`), if any.
    fn protocol_class_conformance(&self) -> Option<&str>;

    /// Whether the type hierarchy defines an overridable designated initializer.
    fn contains_overridable_designated_initializer(&self) -> bool;

    /// Rewrite a raw type name using the generic bindings of this context.
    fn specialize_type_name(&self, type_name: &str) -> String;
}

/// Default abstract protocol generated mocks conform to.
pub const DEFAULT_ABSTRACT_MOCK_PROTOCOL: &str = "Mockingbird.Mock";

/// Stock [`MockingContext`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockContext {
    mockable_type_name: String,
    kind: MockableKind,
    scoped_mock_type_name: String,
    abstract_mock_protocol_name: String,
    protocol_class_conformance: Option<String>,
    contains_overridable_designated_initializer: bool,
    substitutions: FxHashMap<String, String>,
}

impl MockContext {
    /// Context for a mocked class. The mock type defaults to `<Name>Mock`.
    pub fn class(mockable_type_name: impl Into<String>) -> Self {
        Self::new(mockable_type_name.into(), MockableKind::Class)
    }

    /// Context for a mocked protocol. The mock type defaults to `<Name>Mock`.
    pub fn protocol(mockable_type_name: impl Into<String>) -> Self {
        Self::new(mockable_type_name.into(), MockableKind::Protocol)
    }

    fn new(mockable_type_name: String, kind: MockableKind) -> Self {
        Self {
            scoped_mock_type_name: format!("{mockable_type_name}Mock"),
            mockable_type_name,
            kind,
            abstract_mock_protocol_name: DEFAULT_ABSTRACT_MOCK_PROTOCOL.to_owned(),
            protocol_class_conformance: None,
            contains_overridable_designated_initializer: false,
            substitutions: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_scoped_mock_type_name(mut self, name: impl Into<String>) -> Self {
        self.scoped_mock_type_name = name.into();
        self
    }

    #[must_use]
    pub fn with_abstract_mock_protocol_name(mut self, name: impl Into<String>) -> Self {
        self.abstract_mock_protocol_name = name.into();
        self
    }

    #[must_use]
    pub fn with_protocol_class_conformance(mut self, class_name: impl Into<String>) -> Self {
        self.protocol_class_conformance = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn with_overridable_designated_initializer(mut self, contains: bool) -> Self {
        self.contains_overridable_designated_initializer = contains;
        self
    }

    /// Bind a generic parameter of the enclosing type to a concrete type.
    #[must_use]
    pub fn with_substitution(
        mut self,
        generic_parameter: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.substitutions
            .insert(generic_parameter.into(), replacement.into());
        self
    }
}

impl MockingContext for MockContext {
    fn mockable_type_name(&self) -> &str {
        &self.mockable_type_name
    }

    fn mockable_kind(&self) -> MockableKind {
        self.kind
    }

    fn scoped_mock_type_name(&self) -> &str {
        &self.scoped_mock_type_name
    }

    fn abstract_mock_protocol_name(&self) -> &str {
        &self.abstract_mock_protocol_name
    }

    fn protocol_class_conformance(&self) -> Option<&str> {
        self.protocol_class_conformance.as_deref()
    }

    fn contains_overridable_designated_initializer(&self) -> bool {
        self.contains_overridable_designated_initializer
    }

    /// Replace whole identifiers that name a bound generic parameter.
    ///
    /// Member accesses (`T.Element`) keep their member name, and replacements
    /// are not themselves rescanned.
    fn specialize_type_name(&self, type_name: &str) -> String {
        if self.substitutions.is_empty() {
            return type_name.to_owned();
        }

        let mut result = String::with_capacity(type_name.len());
        let mut chars = type_name.char_indices().peekable();
        let mut previous = None;

        while let Some((start, c)) = chars.next() {
            if !(c.is_alphabetic() || c == '_') {
                result.push(c);
                previous = Some(c);
                continue;
            }

            let mut end = start + c.len_utf8();
            while let Some(&(index, next)) = chars.peek() {
                if !(next.is_alphanumeric() || next == '_') {
                    break;
                }
                end = index + next.len_utf8();
                chars.next();
            }

            let identifier = &type_name[start..end];
            match self.substitutions.get(identifier) {
                Some(replacement) if previous != Some('.') => result.push_str(replacement),
                _ => result.push_str(identifier),
            }
            previous = identifier.chars().last();
        }

        result
    }
}
