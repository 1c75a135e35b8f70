//! Initializer proxy rendering.
//!
//! Mocks of types with initializers are created through `initialize(...)`
//! proxies rather than the initializer itself. Four overloads share one
//! construction body and differ in what they return:
//!
//! | Style | Returns |
//! |---|---|
//! | Implicit | the abstract mock protocol |
//! | Explicit | a caller-annotated generic mock type (forced cast) |
//! | Dummy | the concrete mock type |
//! | Unavailable | obsoleted; steers ambiguous calls to the others |

use mockgen_ir::{Attributes, MockingContext};

use super::{FullNameMode, MethodRenderer};
use crate::artifact::{InitializerStyle, RenderedArtifact};

/// Proxies are top-level members of the per-type proxy namespace.
const PROXY_LEVEL: usize = 0;

impl<C: MockingContext + ?Sized> MethodRenderer<'_, C> {
    /// Render all four proxies, or none if the initializer has no proxies.
    pub fn render_initializer_proxies(&self) -> Vec<RenderedArtifact> {
        if !self.method.is_initializer() || !self.initializer_branch().has_proxies() {
            return Vec::new();
        }
        InitializerStyle::ALL
            .into_iter()
            .map(|style| self.render_initializer_proxy(style))
            .collect()
    }

    fn render_initializer_proxy(&self, style: InitializerStyle) -> RenderedArtifact {
        let failable = if self.method.attributes().has(Attributes::FAILABLE) {
            "?"
        } else {
            ""
        };
        let scoped_name = self.ctx.scoped_mock_type_name();
        let generic_mock_type = self.config.generic_mock_type_name.as_str();
        let return_type = match style {
            InitializerStyle::Implicit => self.ctx.abstract_mock_protocol_name(),
            InitializerStyle::Explicit | InitializerStyle::Unavailable => generic_mock_type,
            InitializerStyle::Dummy => scoped_name,
        };
        let definition = format!(
            "{}{} -> {return_type}{failable}{}",
            self.full_name(FullNameMode::InitializerProxy(style)),
            self.mocking_effect(),
            self.generic_constraints()
        );

        let mut writer = self.writer_at(PROXY_LEVEL);
        if style == InitializerStyle::Unavailable {
            writer.line(&format!(
                "@available(swift, obsoleted: 3.0, message: \"Store the mock in a variable of type '{scoped_name}' or use 'dummy({scoped_name}.self).{}(...)' to create a non-mockable dummy object\")",
                self.config.initializer_proxy_name
            ));
            self.write_declaration_attributes(&mut writer);
            writer.line(&format!("public func {definition} {{ fatalError() }}"));
        } else {
            self.write_declaration_attributes(&mut writer);
            writer.open(&format!("public func {definition} {{"));
            writer.line(&format!(
                "let mock: {scoped_name}{failable} = {}{scoped_name}({})",
                self.try_keyword(),
                self.super_call_arguments()
            ));
            writer.line(&format!(
                "mock{failable}.sourceLocation = {}(__file, __line)",
                self.config.qualified("SourceLocation")
            ));
            if style == InitializerStyle::Explicit {
                writer.line(&format!("return (mock as! {generic_mock_type})"));
            } else {
                writer.line("return mock");
            }
            writer.close("}");
        }

        RenderedArtifact::initializer_proxy(definition, writer.finish(), style)
    }
}
