//! Target-language spelling helpers.
//!
//! Type names reach the generator as printable strings, already resolved by
//! the extraction stage. The helpers here only rewrite their surface syntax;
//! nothing is parsed beyond leading attributes and the variadic marker.

use std::borrow::Cow;

/// Trailing marker of a variadic parameter type (`Int...`).
pub const VARIADIC_MARKER: &str = "...";

/// Attributes that may lead a parameter type but are not part of the value type.
const PARAMETER_ATTRIBUTES: [&str; 6] = [
    "inout",
    "@escaping",
    "@autoclosure",
    "@noescape",
    "__owned",
    "__shared",
];

/// Words that must be wrapped in backticks to be used as identifiers.
const RESERVED_WORDS: [&str; 53] = [
    "Any",
    "Self",
    "as",
    "associatedtype",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "private",
    "precedencegroup",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
];

/// Check if a type name is the void sentinel.
pub fn is_void(type_name: &str) -> bool {
    matches!(type_name.trim(), "Void" | "()")
}

/// Turn implicitly unwrapped optionals (`T!`) into plain optionals (`T?`).
///
/// Closure types and generic arguments cannot carry `!`, so any type that
/// ends up inside a cast or a generic parameter list goes through here.
pub fn removing_implicitly_unwrapped_optionals(type_name: &str) -> Cow<'_, str> {
    if type_name.contains('!') {
        Cow::Owned(type_name.replace('!', "?"))
    } else {
        Cow::Borrowed(type_name)
    }
}

/// Strip leading parameter attributes (`inout`, `@escaping`, ...) from a type.
pub fn removing_parameter_attributes(type_name: &str) -> &str {
    let mut rest = type_name.trim_start();
    'strip: loop {
        for attribute in PARAMETER_ATTRIBUTES {
            if let Some(tail) = rest.strip_prefix(attribute) {
                if tail.starts_with(char::is_whitespace) {
                    rest = tail.trim_start();
                    continue 'strip;
                }
            }
        }
        return rest;
    }
}

/// Element type of a variadic parameter type (`Int...` -> `Int`).
pub fn variadic_element_type(type_name: &str) -> &str {
    type_name
        .trim_end()
        .strip_suffix(VARIADIC_MARKER)
        .map_or(type_name, str::trim_end)
}

/// Declared spelling of a variadic parameter type, always ending in `...`.
pub fn variadic_declaration(type_name: &str) -> Cow<'_, str> {
    if type_name.trim_end().ends_with(VARIADIC_MARKER) {
        Cow::Borrowed(type_name)
    } else {
        Cow::Owned(format!("{type_name}{VARIADIC_MARKER}"))
    }
}

/// Check if a name is spelled like an identifier rather than an operator.
pub fn is_identifier_like(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Check if a word is reserved in declaration position.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Backtick-escape an identifier that cannot be used bare.
///
/// Operators and already-escaped names pass through unchanged.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if is_identifier_like(name) && (starts_with_digit || is_reserved_word(name)) {
        Cow::Owned(format!("`{name}`"))
    } else {
        Cow::Borrowed(name)
    }
}
