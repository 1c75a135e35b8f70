//! Mocked override rendering.
//!
//! The override is where a call on the mock lands. It records the
//! invocation exactly once and then resolves the call: methods fall through
//! to stub dispatch, initializers forward to a designated initializer (or
//! refuse to run at all when they must be reached through a proxy).

use mockgen_ir::MockingContext;

use super::{FullNameMode, InitializerBranch, MethodRenderer};
use crate::artifact::RenderedArtifact;
use crate::writer::SourceWriter;

impl<C: MockingContext + ?Sized> MethodRenderer<'_, C> {
    /// Render the mocked override, or `None` for convenience initializers.
    pub fn render_mocked_override(&self) -> Option<RenderedArtifact> {
        if self.method.is_initializer() {
            self.render_mocked_initializer()
        } else {
            Some(self.render_mocked_method())
        }
    }

    fn render_mocked_method(&self) -> RenderedArtifact {
        let selector = self.unique_declaration();

        let mut writer = self.member_writer();
        self.write_mark(&mut writer);
        self.write_declaration_attributes(&mut writer);
        writer.open(&format!("public {}func {selector} {{", self.modifiers(true)));
        self.write_invocation_record(&mut writer, &selector);
        self.write_stub_dispatch(&mut writer);
        writer.close("}");

        RenderedArtifact::new(selector, writer.finish())
    }

    fn render_mocked_initializer(&self) -> Option<RenderedArtifact> {
        let branch = self.initializer_branch();
        tracing::trace!(?branch, "mocked initializer branch");
        if branch == InitializerBranch::Convenience {
            return None;
        }

        let selector = self.unique_declaration();
        let declaration = format!("public {}{selector} {{", self.modifiers(true));

        let mut writer = self.member_writer();
        self.write_mark(&mut writer);
        self.write_declaration_attributes(&mut writer);
        match branch {
            InitializerBranch::ClassBound => {
                writer.open(&declaration);
                writer.line(&format!(
                    "{}super.init({})",
                    self.try_keyword(),
                    self.super_call_arguments()
                ));
                self.write_version_check(&mut writer);
                self.write_invocation_record(&mut writer, &selector);
            }
            InitializerBranch::ProtocolOnly => {
                writer.open(&declaration);
                if self.ctx.protocol_class_conformance().is_some() {
                    writer.line("super.init()");
                }
                self.write_version_check(&mut writer);
                self.write_invocation_record(&mut writer, &selector);
            }
            InitializerBranch::Shadowed => {
                let message = self.shadowed_initializer_message();
                writer.line(&format!("@available(*, deprecated, message: \"{message}\")"));
                writer.open(&declaration);
                writer.line(&format!("fatalError(\"{message}\")"));
            }
            InitializerBranch::Convenience => return None,
        }
        writer.close("}");

        Some(RenderedArtifact::new(selector, writer.finish()))
    }

    fn write_mark(&self, writer: &mut SourceWriter) {
        writer.line(&format!(
            "// MARK: Mocked {}",
            self.full_name(FullNameMode::Mocking)
        ));
    }

    fn write_version_check(&self, writer: &mut SourceWriter) {
        writer.line(&format!(
            "{}(for: self)",
            self.config.qualified("checkVersion")
        ));
    }

    /// Directs callers of a shadowed protocol initializer to the mock factory.
    fn shadowed_initializer_message(&self) -> String {
        let suffix = if self.ctx.protocol_class_conformance().is_some() {
            format!(".{}(...)", self.config.initializer_proxy_name)
        } else {
            String::new()
        };
        format!(
            "Please use 'mock({}.self){suffix}' to initialize a concrete mock instance",
            self.ctx.mockable_type_name()
        )
    }
}
