//! Stub dispatch.
//!
//! Emitted after the invocation is recorded. Looks up whatever the test
//! registered for the invocation: a closure with the method's exact
//! signature is called with the real arguments, anything else is treated as
//! a zero-argument thunk returning the value.

use mockgen_ir::syntax::is_void;
use mockgen_ir::MockingContext;

use super::MethodRenderer;
use crate::writer::SourceWriter;

impl<C: MockingContext + ?Sized> MethodRenderer<'_, C> {
    pub(super) fn write_stub_dispatch(&self, writer: &mut SourceWriter) {
        let return_type = self.matchable_return_type();
        // A void method may legitimately have no stub at all.
        let is_optional = is_void(&return_type);
        let return_keyword = if is_optional { "" } else { "return " };
        let cast = if is_optional { "as?" } else { "as!" };
        let optional_call = if is_optional { "?" } else { "" };
        let try_keyword = self.try_keyword();

        writer.line(&format!(
            "let implementation = {}stubbingContext.implementation(for: invocation, optional: {is_optional})",
            self.context_prefix()
        ));
        writer.open(&format!(
            "if let concreteImplementation = implementation as? {} {{",
            self.closure_signature()
        ));
        writer.line(&format!(
            "{return_keyword}{try_keyword}concreteImplementation({})",
            self.invocation_arguments()
        ));
        writer.close("} else {");
        writer.indent();
        writer.line(&format!(
            "{return_keyword}{try_keyword}(implementation {cast} () {}-> {return_type}){optional_call}()",
            self.matching_effect()
        ));
        writer.close("}");
    }
}
