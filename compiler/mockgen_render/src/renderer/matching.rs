//! Matcher accessor rendering.
//!
//! Test code calls the accessor with argument matchers instead of values and
//! gets back a handle for stubbing or verification. Initializers have no
//! accessor; they are reached through initializer proxies instead.

use mockgen_ir::syntax::escape_identifier;
use mockgen_ir::MockingContext;

use super::{FullNameMode, MethodRenderer};
use crate::artifact::RenderedArtifact;

impl<C: MockingContext + ?Sized> MethodRenderer<'_, C> {
    /// Render the matcher accessor, plus the variadic overload when needed.
    ///
    /// An autoclosure cannot take a variable-length argument list, so a
    /// method with a variadic parameter gets a second accessor that accepts
    /// the values directly.
    pub fn render_matcher_accessors(&self) -> Vec<RenderedArtifact> {
        if self.method.is_initializer() {
            return Vec::new();
        }

        let mut accessors = vec![self.render_matcher_accessor(false)];
        if self.method.has_variadic_parameter() {
            accessors.push(self.render_matcher_accessor(true));
        }
        accessors
    }

    fn render_matcher_accessor(&self, variadic_overload: bool) -> RenderedArtifact {
        let mockable = format!(
            "{}<{}, {}, {}>",
            self.config.qualified("Mockable"),
            self.config.qualified("MethodDeclaration"),
            self.closure_signature(),
            self.matchable_return_type()
        );
        let definition = format!(
            "{} -> {mockable}{}",
            self.full_name(FullNameMode::Matching { variadic_overload }),
            self.generic_constraints()
        );
        let selector = self.unique_declaration();
        let invocation = self.config.qualified("Invocation");

        let mut writer = self.member_writer();
        self.write_declaration_attributes(&mut writer);
        writer.open(&format!("public {}func {definition} {{", self.modifiers(false)));
        if self.method.parameters().is_empty() {
            writer.line(&format!(
                "let invocation: {invocation} = {invocation}(selectorName: \"{selector}\", arguments: [])"
            ));
        } else {
            writer.line(&format!(
                "let arguments: [{}] = [{}]",
                self.config.qualified("ArgumentMatcher"),
                self.resolved_argument_matchers(variadic_overload)
            ));
            writer.line(&format!(
                "let invocation: {invocation} = {invocation}(selectorName: \"{selector}\", arguments: arguments)"
            ));
        }
        writer.line(&format!(
            "return {mockable}(mock: {}, invocation: invocation)",
            self.mock_object()
        ));
        writer.close("}");

        RenderedArtifact::new(definition, writer.finish())
    }

    /// Every parameter goes through `resolve`, except a variadic parameter in
    /// the variadic overload, which is already a concrete array.
    fn resolved_argument_matchers(&self, variadic_overload: bool) -> String {
        let resolve = self.config.qualified("resolve");
        let argument_matcher = self.config.qualified("ArgumentMatcher");
        let matchers: Vec<String> = self
            .method
            .parameters()
            .iter()
            .map(|parameter| {
                let name = escape_identifier(parameter.name());
                if variadic_overload && parameter.is_variadic() {
                    format!("{argument_matcher}({name})")
                } else {
                    format!("{resolve}({name})")
                }
            })
            .collect();
        matchers.join(", ")
    }
}
