//! Full-name derivation.
//!
//! One pure function, [`MethodRenderer::full_name`], turns a method into its
//! declaration head (`name<Generics>(parameters)`) under a [`FullNameMode`].
//! The mocking-mode name is the basis of the invocation selector, so every
//! other mode must stay collision-free against it.

use std::borrow::Cow;

use mockgen_ir::syntax::{
    escape_identifier, removing_implicitly_unwrapped_optionals, removing_parameter_attributes,
    variadic_declaration, variadic_element_type,
};
use mockgen_ir::{Attributes, MockingContext, Parameter, INITIALIZER_NAME};

use super::MethodRenderer;
use crate::artifact::InitializerStyle;

/// Operators that cannot name a matcher accessor, with their aliases.
pub const RESERVED_NAMES: [(&str, &str); 6] = [
    // Equatable
    ("==", "_equalTo"),
    ("!=", "_notEqualTo"),
    // Comparable
    ("<", "_lessThan"),
    ("<=", "_lessThanOrEqualTo"),
    (">", "_greaterThan"),
    (">=", "_greaterThanOrEqualTo"),
];

/// Trailing parameters capturing the call site of an initializer proxy.
const SOURCE_LOCATION_PARAMETERS: [&str; 2] =
    ["__file: StaticString = #file", "__line: UInt = #line"];

/// Which declaration a full name is derived for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FullNameMode {
    /// The mocked override; also the invocation selector.
    Mocking,
    /// A matcher accessor. With `variadic_overload`, the variadic parameter
    /// keeps its declared type instead of becoming a lazy matcher.
    Matching { variadic_overload: bool },
    /// One of the initializer proxies.
    InitializerProxy(InitializerStyle),
}

impl FullNameMode {
    #[inline]
    pub const fn is_matching(self) -> bool {
        matches!(self, FullNameMode::Matching { .. })
    }

    #[inline]
    pub const fn uses_variadic_overload(self) -> bool {
        matches!(
            self,
            FullNameMode::Matching {
                variadic_overload: true
            }
        )
    }

    #[inline]
    pub const fn initializer_style(self) -> Option<InitializerStyle> {
        match self {
            FullNameMode::InitializerProxy(style) => Some(style),
            FullNameMode::Mocking | FullNameMode::Matching { .. } => None,
        }
    }
}

impl<'a, C: MockingContext + ?Sized> MethodRenderer<'a, C> {
    /// Declaration head: `name<Generics>(parameters)`.
    pub fn full_name(&self, mode: FullNameMode) -> String {
        let mut parameters: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| self.parameter_declaration(parameter, mode))
            .collect();
        if mode.initializer_style().is_some() {
            parameters.extend(SOURCE_LOCATION_PARAMETERS.iter().map(|&p| p.to_owned()));
        }

        format!("{}({})", self.short_name(mode), parameters.join(", "))
    }

    /// Name, optionality suffix and generic parameter list.
    pub fn short_name(&self, mode: FullNameMode) -> String {
        let style = mode.initializer_style();

        let base: Cow<'_, str> = if style.is_some() {
            Cow::Borrowed(self.config.initializer_proxy_name.as_str())
        } else if self.method.is_initializer() {
            Cow::Borrowed(INITIALIZER_NAME)
        } else {
            escape_identifier(self.method.short_name())
        };
        let base = match self.reserved_alias(&base) {
            Some(alias) if mode.is_matching() => Cow::Borrowed(alias),
            _ => base,
        };

        let attributes = self.method.attributes();
        let failable = if style.is_some() {
            ""
        } else if attributes.has(Attributes::FAILABLE) {
            "?"
        } else if attributes.has(Attributes::UNWRAPPED_FAILABLE) {
            "!"
        } else {
            ""
        };

        let mut generics: Vec<Cow<'_, str>> = self
            .method
            .generic_type_parameters()
            .iter()
            .map(|declaration| Cow::Borrowed(declaration.as_str()))
            .collect();
        let generic_mock_type = &self.config.generic_mock_type_name;
        match style {
            Some(InitializerStyle::Explicit) => generics.push(Cow::Owned(format!(
                "{generic_mock_type}: {}",
                self.ctx.abstract_mock_protocol_name()
            ))),
            Some(InitializerStyle::Unavailable) => {
                generics.push(Cow::Borrowed(generic_mock_type.as_str()));
            }
            Some(InitializerStyle::Implicit | InitializerStyle::Dummy) | None => {}
        }

        if generics.is_empty() {
            format!("{base}{failable}")
        } else {
            format!("{base}{failable}<{}>", generics.join(", "))
        }
    }

    /// Textual alias for an operator in the matcher namespace, if reserved.
    fn reserved_alias(&self, name: &str) -> Option<&'a str> {
        self.config
            .reserved_names
            .iter()
            .find(|(operator, _)| operator == name)
            .map(|(_, alias)| alias.as_str())
            .or_else(|| {
                RESERVED_NAMES
                    .iter()
                    .find(|(operator, _)| *operator == name)
                    .map(|(_, alias)| *alias)
            })
    }

    /// `label name: Type`, `name: Type` or `_ name: Type`.
    fn parameter_declaration(&self, parameter: &Parameter, mode: FullNameMode) -> String {
        let keeps_declared_type = mode.uses_variadic_overload() && parameter.is_variadic();
        let type_name = if mode.is_matching() && !keeps_declared_type {
            format!(
                "@escaping @autoclosure () -> {}",
                self.matchable_type_name(parameter)
            )
        } else {
            self.declared_type_name(parameter)
        };

        let name = escape_identifier(parameter.name());
        match parameter.argument_label().map(escape_identifier) {
            Some(label) if label == name => format!("{name}: {type_name}"),
            Some(label) => format!("{label} {name}: {type_name}"),
            None => format!("_ {name}: {type_name}"),
        }
    }

    /// Parameter type as declared, variadic marker included.
    pub(super) fn declared_type_name(&self, parameter: &Parameter) -> String {
        let specialized = self.ctx.specialize_type_name(parameter.type_name());
        if parameter.is_variadic() {
            variadic_declaration(&specialized).into_owned()
        } else {
            specialized
        }
    }

    /// Parameter type inside a closure type: variadics become arrays.
    pub(super) fn closure_type_name(&self, parameter: &Parameter) -> String {
        let specialized = self.ctx.specialize_type_name(parameter.type_name());
        let plain = removing_implicitly_unwrapped_optionals(&specialized);
        if parameter.is_variadic() {
            format!("[{}]", variadic_element_type(&plain))
        } else {
            plain.into_owned()
        }
    }

    /// Value type a matcher compares against: no parameter attributes.
    pub(super) fn matchable_type_name(&self, parameter: &Parameter) -> String {
        let specialized = self.ctx.specialize_type_name(parameter.type_name());
        let value_type = removing_parameter_attributes(&specialized);
        if parameter.is_variadic() {
            format!("[{}]", variadic_element_type(value_type))
        } else {
            value_type.to_owned()
        }
    }
}
