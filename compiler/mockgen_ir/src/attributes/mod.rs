//! Method and parameter attribute flags.
//!
//! One flag set covers both method-level attributes (effects, scope,
//! initializer shape) and parameter-level attributes (variadic, closure
//! capture). Renderers only ever ask membership questions.
//!
//! # Categories
//! - **Effect flags**: how errors propagate out of the method
//! - **Scope flags**: whether the member lives on the type instead of an instance
//! - **Initializer flags**: designated/convenience/required/failable shape
//! - **Parameter flags**: how an argument is passed and captured

use bitflags::bitflags;

bitflags! {
    /// Attribute set attached to a method or a parameter.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Attributes: u16 {
        // === Effect Flags (bits 0-1) ===

        /// Declared `throws`.
        const THROWS = 1 << 0;
        /// Declared `rethrows`.
        const RETHROWS = 1 << 1;

        // === Scope Flags (bits 2-3) ===

        /// `static` member.
        const STATIC = 1 << 2;
        /// `class` member (overridable type-level member).
        const CLASS_SCOPE = 1 << 3;

        // === Initializer Flags (bits 4-7) ===

        /// `required` initializer.
        const REQUIRED = 1 << 4;
        /// `convenience` initializer.
        const CONVENIENCE = 1 << 5;
        /// `init?`.
        const FAILABLE = 1 << 6;
        /// `init!`.
        const UNWRAPPED_FAILABLE = 1 << 7;

        // === Parameter Flags (bits 8-12) ===

        /// Variadic parameter (`T...`).
        const VARIADIC = 1 << 8;
        /// `@escaping` closure parameter.
        const ESCAPING = 1 << 9;
        /// `@autoclosure` parameter.
        const AUTOCLOSURE = 1 << 10;
        /// `inout` parameter.
        const INOUT = 1 << 11;
        /// Parameter whose type is a function type.
        const CLOSURE = 1 << 12;
    }
}

impl Attributes {
    /// Flags that place a member on the type rather than an instance.
    pub const TYPE_SCOPE: Self = Self::STATIC.union(Self::CLASS_SCOPE);

    /// Flags only meaningful on initializers.
    pub const INITIALIZER_ONLY: Self = Self::REQUIRED
        .union(Self::CONVENIENCE)
        .union(Self::FAILABLE)
        .union(Self::UNWRAPPED_FAILABLE);

    /// Membership query for a single attribute (or every attribute in `other`).
    #[inline]
    pub const fn has(self, other: Self) -> bool {
        self.contains(other)
    }

    /// Check if the member is declared `throws`.
    #[inline]
    pub const fn is_throwing(self) -> bool {
        self.contains(Self::THROWS)
    }

    /// Check if the member is declared `rethrows`.
    #[inline]
    pub const fn is_rethrowing(self) -> bool {
        self.contains(Self::RETHROWS)
    }

    /// Check if the member is `static` or `class` scoped.
    #[inline]
    pub const fn is_type_scoped(self) -> bool {
        self.intersects(Self::TYPE_SCOPE)
    }

    /// Check if the parameter is variadic.
    #[inline]
    pub const fn is_variadic(self) -> bool {
        self.contains(Self::VARIADIC)
    }

    /// A closure parameter that is not `@escaping` cannot outlive the call,
    /// so it can never be stored in a recorded invocation.
    #[inline]
    pub const fn is_non_escaping_closure(self) -> bool {
        self.contains(Self::CLOSURE) && !self.contains(Self::ESCAPING)
    }

    /// Source spelling of a single attribute, for diagnostics.
    pub fn keyword(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map_or("<attributes>", |(_, keyword)| keyword)
    }
}

const KEYWORDS: [(Attributes, &str); 13] = [
    (Attributes::THROWS, "throws"),
    (Attributes::RETHROWS, "rethrows"),
    (Attributes::STATIC, "static"),
    (Attributes::CLASS_SCOPE, "class"),
    (Attributes::REQUIRED, "required"),
    (Attributes::CONVENIENCE, "convenience"),
    (Attributes::FAILABLE, "init?"),
    (Attributes::UNWRAPPED_FAILABLE, "init!"),
    (Attributes::VARIADIC, "..."),
    (Attributes::ESCAPING, "@escaping"),
    (Attributes::AUTOCLOSURE, "@autoclosure"),
    (Attributes::INOUT, "inout"),
    (Attributes::CLOSURE, "closure"),
];
