//! Per-method rendering.
//!
//! A [`MethodRenderer`] borrows one method, its enclosing context and the
//! configuration, and produces every declaration the method contributes to
//! the generated mock:
//!
//! - [`mocked`]: the override that records calls and dispatches to stubs
//! - [`matching`]: the matcher accessor(s) used to stub and verify
//! - [`proxy`]: the four initializer proxies (initializers only)
//! - [`stub`]: the stub dispatch tail of a mocked override
//! - [`naming`]: full-name derivation shared by all of the above
//!
//! The renderer is a pure function of its inputs. Nothing is cached between
//! calls, so rendering the same method twice yields the same text.

mod matching;
mod mocked;
mod naming;
mod proxy;
mod stub;

pub use naming::{FullNameMode, RESERVED_NAMES};

use mockgen_ir::syntax::{escape_identifier, removing_implicitly_unwrapped_optionals};
use mockgen_ir::{Attributes, CompilationDirective, Method, MockableKind, MockingContext};

use crate::artifact::RenderedArtifact;
use crate::config::RenderConfig;
use crate::writer::SourceWriter;

/// Indentation level of declarations inside the generated mock type.
const MEMBER_LEVEL: usize = 1;

/// Everything one method contributes to a generated mock.
#[derive(Clone, Debug, Default)]
pub struct MethodRendering {
    /// Directive guards, mocked override and matcher accessors, joined.
    pub text: String,
    /// The mocked override, if the method gets one.
    pub mocked: Option<RenderedArtifact>,
    /// Matcher accessors: none, one, or two with a variadic parameter.
    pub matchers: Vec<RenderedArtifact>,
    /// Initializer proxies, consumed by the per-type template.
    pub initializer_proxies: Vec<RenderedArtifact>,
}

/// How an initializer is mocked.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitializerBranch {
    /// Arguments for the designated initializer cannot be inferred; skipped.
    Convenience,
    /// Declared on a class (or a class a protocol conforms to); forwards to `super`.
    ClassBound,
    /// Protocol initializer with no overridable class initializer in the hierarchy.
    ProtocolOnly,
    /// Protocol initializer shadowed by a class designated initializer; unusable.
    Shadowed,
}

impl InitializerBranch {
    /// Whether initializer proxies are generated for this branch.
    pub const fn has_proxies(self) -> bool {
        matches!(self, InitializerBranch::ClassBound | InitializerBranch::ProtocolOnly)
    }
}

/// Renders one method against its enclosing context.
pub struct MethodRenderer<'a, C: MockingContext + ?Sized> {
    method: &'a Method,
    ctx: &'a C,
    config: &'a RenderConfig,
}

impl<'a, C: MockingContext + ?Sized> MethodRenderer<'a, C> {
    pub fn new(method: &'a Method, ctx: &'a C, config: &'a RenderConfig) -> Self {
        Self {
            method,
            ctx,
            config,
        }
    }

    pub fn method(&self) -> &'a Method {
        self.method
    }

    /// Render every declaration for this method.
    pub fn render(&self) -> MethodRendering {
        tracing::debug!(
            method = self.method.short_name(),
            kind = ?self.method.kind(),
            parameters = self.method.parameters().len(),
            "rendering method"
        );

        let mocked = self.render_mocked_override();
        let matchers = self.render_matcher_accessors();
        let initializer_proxies = self.render_initializer_proxies();
        let text = self.assemble(mocked.as_ref(), &matchers);

        MethodRendering {
            text,
            mocked,
            matchers,
            initializer_proxies,
        }
    }

    /// Join directive guards and declarations with blank lines.
    ///
    /// A method that declares nothing yields nothing, guards included.
    fn assemble(&self, mocked: Option<&RenderedArtifact>, matchers: &[RenderedArtifact]) -> String {
        let declarations: Vec<&str> = mocked
            .into_iter()
            .chain(matchers)
            .map(RenderedArtifact::body)
            .collect();
        if declarations.is_empty() {
            return String::new();
        }

        let (start, end) = self.compilation_directives();
        std::iter::once(start.as_str())
            .chain(declarations)
            .chain(std::iter::once(end.as_str()))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Opening guard lines in order, and one closing line per guard.
    fn compilation_directives(&self) -> (String, String) {
        let directives = self.method.compilation_directives();
        let mut start = self.member_writer();
        let mut end = self.member_writer();
        for directive in directives {
            start.line(directive.declaration());
            end.line(CompilationDirective::END);
        }
        (start.finish(), end.finish())
    }

    // -- Writers --

    fn writer_at(&self, level: usize) -> SourceWriter {
        SourceWriter::new(self.config.indent_width).at_level(level)
    }

    fn member_writer(&self) -> SourceWriter {
        self.writer_at(MEMBER_LEVEL)
    }

    fn write_declaration_attributes(&self, writer: &mut SourceWriter) {
        let attributes = self.method.declaration_attributes();
        if !attributes.is_empty() {
            writer.line(&attributes.join(" "));
        }
    }

    // -- Classification --

    /// Declared in a class, or in a class the protocol conforms to.
    pub fn is_class_bound(&self) -> bool {
        let class_defined_conformance =
            self.ctx.protocol_class_conformance().is_some() && self.method.is_overridable();
        self.ctx.mockable_kind() == MockableKind::Class || class_defined_conformance
    }

    /// Which initializer strategy applies. Only meaningful for initializers.
    pub fn initializer_branch(&self) -> InitializerBranch {
        if self.method.attributes().has(Attributes::CONVENIENCE) {
            InitializerBranch::Convenience
        } else if self.is_class_bound() {
            InitializerBranch::ClassBound
        } else if !self.ctx.contains_overridable_designated_initializer() {
            InitializerBranch::ProtocolOnly
        } else {
            InitializerBranch::Shadowed
        }
    }

    // -- Shared fragments --

    /// Declaration modifiers; `allow_override` is false for matcher accessors.
    fn modifiers(&self, allow_override: bool) -> String {
        let is_required = self.method.attributes().has(Attributes::REQUIRED);
        let mut modifiers = String::new();
        if is_required || self.method.is_initializer() {
            modifiers.push_str("required ");
        }
        if allow_override && self.method.is_overridable() && !is_required {
            modifiers.push_str("override ");
        }
        if self.method.is_type_scoped() {
            modifiers.push_str("static ");
        }
        modifiers
    }

    /// ` where A, B`, specialized, or empty.
    fn generic_constraints(&self) -> String {
        let clauses = self.method.where_clauses();
        if clauses.is_empty() {
            return String::new();
        }
        let specialized: Vec<String> = clauses
            .iter()
            .map(|clause| self.ctx.specialize_type_name(clause))
            .collect();
        format!(" where {}", specialized.join(", "))
    }

    fn specialized_return_type(&self) -> String {
        self.ctx.specialize_type_name(self.method.return_type_name())
    }

    /// Return type as it appears in closure and generic positions.
    fn matchable_return_type(&self) -> String {
        removing_implicitly_unwrapped_optionals(&self.specialized_return_type()).into_owned()
    }

    /// `try ` for throwing methods only; a stub is never the rethrown closure.
    fn try_keyword(&self) -> &'static str {
        if self.method.attributes().is_throwing() {
            "try "
        } else {
            ""
        }
    }

    /// Effect written on the mocked declaration itself.
    fn mocking_effect(&self) -> &'static str {
        let attributes = self.method.attributes();
        if attributes.is_rethrowing() {
            " rethrows"
        } else if attributes.is_throwing() {
            " throws"
        } else {
            ""
        }
    }

    /// Effect written on stub closure types. Stubs cannot rethrow.
    fn matching_effect(&self) -> &'static str {
        if self.method.attributes().is_throwing() {
            "throws "
        } else {
            ""
        }
    }

    /// Selector shared by the mocked override and its matcher accessors.
    pub fn unique_declaration(&self) -> String {
        let full_name = self.full_name(FullNameMode::Mocking);
        let effect = self.mocking_effect();
        let constraints = self.generic_constraints();
        if self.method.is_initializer() {
            format!("{full_name}{effect}{constraints}")
        } else {
            let return_type = self.specialized_return_type();
            format!("{full_name}{effect} -> {return_type}{constraints}")
        }
    }

    /// `(A, B) [throws ]-> R`: the concrete stub implementation type.
    fn closure_signature(&self) -> String {
        let parameter_types: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| self.closure_type_name(parameter))
            .collect();
        format!(
            "({}) {}-> {}",
            parameter_types.join(", "),
            self.matching_effect(),
            self.matchable_return_type()
        )
    }

    /// Static members keep their stubbing state on a shared proxy object.
    fn mock_object(&self) -> &'static str {
        if self.method.is_type_scoped() {
            "staticMock"
        } else {
            "self"
        }
    }

    fn context_prefix(&self) -> &'static str {
        if self.method.is_type_scoped() {
            "staticMock."
        } else {
            ""
        }
    }

    /// Arguments recorded by the mocked override, one matcher per parameter.
    fn mock_argument_matchers(&self) -> String {
        let argument_matcher = self.config.qualified("ArgumentMatcher");
        let matchers: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| {
                if parameter.attributes().is_non_escaping_closure() {
                    format!(
                        "{argument_matcher}({}<{}>())",
                        self.config.qualified("NonEscapingClosure"),
                        self.matchable_type_name(parameter)
                    )
                } else {
                    format!("{argument_matcher}({})", escape_identifier(parameter.name()))
                }
            })
            .collect();
        matchers.join(", ")
    }

    /// Arguments forwarded to a concrete stub implementation.
    fn invocation_arguments(&self) -> String {
        let arguments: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| {
                let attributes = parameter.attributes();
                let inout = if attributes.has(Attributes::INOUT) { "&" } else { "" };
                let call = if attributes.has(Attributes::AUTOCLOSURE) { "()" } else { "" };
                format!("{inout}{}{call}", escape_identifier(parameter.name()))
            })
            .collect();
        arguments.join(", ")
    }

    /// Arguments forwarded to a designated initializer.
    fn super_call_arguments(&self) -> String {
        let arguments: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| {
                let name = escape_identifier(parameter.name());
                match parameter.argument_label() {
                    Some(label) => format!("{label}: {name}"),
                    None => name.into_owned(),
                }
            })
            .collect();
        arguments.join(", ")
    }

    /// Record the call under `selector`.
    fn write_invocation_record(&self, writer: &mut SourceWriter, selector: &str) {
        let invocation = self.config.qualified("Invocation");
        writer.line(&format!(
            "let invocation: {invocation} = {invocation}(selectorName: \"{selector}\", arguments: [{}])",
            self.mock_argument_matchers()
        ));
        writer.line(&format!(
            "{}mockingContext.didInvoke(invocation)",
            self.context_prefix()
        ));
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on invalid models"
)]
mod tests;
