use mockgen_ir::{Attributes, Method, MethodKind, MockContext, Parameter};
use pretty_assertions::assert_eq;

use super::*;
use crate::artifact::InitializerStyle;

const MATCHING: FullNameMode = FullNameMode::Matching {
    variadic_overload: false,
};
const MATCHING_VARIADIC: FullNameMode = FullNameMode::Matching {
    variadic_overload: true,
};

fn fly_to() -> Method {
    Method::builder("fly")
        .parameter(Parameter::new("destination", "String").with_label("to"))
        .attributes(Attributes::THROWS)
        .returns("Bool")
        .build()
        .unwrap()
}

fn designated_initializer() -> Method {
    Method::initializer()
        .parameter(Parameter::labeled("name", "String"))
        .overridable(true)
        .build()
        .unwrap()
}

fn with_renderer<R>(
    method: &Method,
    ctx: &MockContext,
    f: impl FnOnce(&MethodRenderer<'_, MockContext>) -> R,
) -> R {
    let config = RenderConfig::default();
    f(&MethodRenderer::new(method, ctx, &config))
}

// -- Naming --

#[test]
fn full_name_per_mode() {
    let method = fly_to();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.full_name(FullNameMode::Mocking),
            "fly(to destination: String)"
        );
        assert_eq!(
            renderer.full_name(MATCHING),
            "fly(to destination: @escaping @autoclosure () -> String)"
        );
    });
}

#[test]
fn parameter_label_forms() {
    let method = Method::builder("perch")
        .parameter(Parameter::new("branch", "Branch"))
        .parameter(Parameter::labeled("height", "Int"))
        .parameter(Parameter::new("delay", "Double").with_label("after"))
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.full_name(FullNameMode::Mocking),
            "perch(_ branch: Branch, height: Int, after delay: Double)"
        );
    });
}

#[test]
fn reserved_words_are_escaped() {
    let method = Method::builder("default")
        .parameter(Parameter::labeled("class", "AnyClass"))
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.full_name(FullNameMode::Mocking),
            "`default`(`class`: AnyClass)"
        );
    });
}

#[test]
fn operators_are_aliased_only_when_matching() {
    let method = Method::builder("==")
        .kind(MethodKind::Static)
        .parameter(Parameter::new("lhs", "Bird"))
        .parameter(Parameter::new("rhs", "Bird"))
        .returns("Bool")
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.short_name(FullNameMode::Mocking), "==");
        assert_eq!(renderer.short_name(MATCHING), "_equalTo");
        assert_eq!(
            renderer.full_name(MATCHING),
            "_equalTo(_ lhs: @escaping @autoclosure () -> Bird, _ rhs: @escaping @autoclosure () -> Bird)"
        );
    });
}

#[test]
fn every_comparison_operator_has_an_alias() {
    let ctx = MockContext::protocol("Bird");
    for (operator, alias) in RESERVED_NAMES {
        let method = Method::builder(operator).build().unwrap();
        with_renderer(&method, &ctx, |renderer| {
            assert_eq!(renderer.short_name(MATCHING), alias);
        });
    }
}

#[test]
fn configured_aliases_take_precedence() {
    let method = Method::builder("~=").build().unwrap();
    let ctx = MockContext::protocol("Bird");
    let config = RenderConfig::default()
        .reserve_name("~=", "_patternMatches")
        .reserve_name("==", "_isEqual");
    let renderer = MethodRenderer::new(&method, &ctx, &config);
    assert_eq!(renderer.short_name(MATCHING), "_patternMatches");

    let equality = Method::builder("==").build().unwrap();
    let renderer = MethodRenderer::new(&equality, &ctx, &config);
    assert_eq!(renderer.short_name(MATCHING), "_isEqual");
}

#[test]
fn generic_parameters_follow_failability() {
    let method = Method::initializer()
        .attributes(Attributes::FAILABLE)
        .generic_parameter("T: Equatable")
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.short_name(FullNameMode::Mocking), "init?<T: Equatable>");
        assert_eq!(
            renderer.short_name(FullNameMode::InitializerProxy(InitializerStyle::Implicit)),
            "initialize<T: Equatable>"
        );
        assert_eq!(
            renderer.short_name(FullNameMode::InitializerProxy(InitializerStyle::Explicit)),
            "initialize<T: Equatable, __ReturnType: Mockingbird.Mock>"
        );
        assert_eq!(
            renderer.short_name(FullNameMode::InitializerProxy(InitializerStyle::Unavailable)),
            "initialize<T: Equatable, __ReturnType>"
        );
    });
}

#[test]
fn unwrapped_failable_suffix() {
    let method = Method::initializer()
        .attributes(Attributes::UNWRAPPED_FAILABLE)
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.full_name(FullNameMode::Mocking), "init!()");
    });
}

#[test]
fn proxies_append_source_location() {
    let method = designated_initializer();
    let ctx = MockContext::class("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.full_name(FullNameMode::InitializerProxy(InitializerStyle::Dummy)),
            "initialize(name: String, __file: StaticString = #file, __line: UInt = #line)"
        );
    });
}

#[test]
fn variadic_parameter_per_mode() {
    let method = Method::builder("sing")
        .parameter(Parameter::new("notes", "Note").with_attributes(Attributes::VARIADIC))
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.full_name(FullNameMode::Mocking), "sing(_ notes: Note...)");
        assert_eq!(
            renderer.full_name(MATCHING),
            "sing(_ notes: @escaping @autoclosure () -> [Note])"
        );
        assert_eq!(renderer.full_name(MATCHING_VARIADIC), "sing(_ notes: Note...)");
        assert_eq!(renderer.closure_signature(), "([Note]) -> Void");
    });
}

#[test]
fn types_are_specialized() {
    let method = Method::builder("feed")
        .parameter(Parameter::labeled("food", "T"))
        .returns("T.Portion")
        .where_clause("T: Food")
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird").with_substitution("T", "Seed");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.unique_declaration(),
            "feed(food: Seed) -> Seed.Portion where Seed: Food"
        );
    });
}

// -- Shared fragments --

#[test]
fn unique_declaration_includes_effect() {
    let method = fly_to();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(
            renderer.unique_declaration(),
            "fly(to destination: String) throws -> Bool"
        );
        assert_eq!(renderer.closure_signature(), "(String) throws -> Bool");
    });
}

#[test]
fn initializer_declaration_has_no_return() {
    let method = designated_initializer();
    let ctx = MockContext::class("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.unique_declaration(), "init(name: String)");
    });
}

#[test]
fn rethrowing_effects() {
    let method = Method::builder("perform")
        .parameter(
            Parameter::new("block", "() throws -> Void")
                .with_attributes(Attributes::CLOSURE),
        )
        .attributes(Attributes::RETHROWS)
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.mocking_effect(), " rethrows");
        assert_eq!(renderer.matching_effect(), "");
        assert_eq!(renderer.try_keyword(), "");
    });
}

#[test]
fn implicitly_unwrapped_returns_become_optional() {
    let method = Method::builder("nest").returns("Nest!").build().unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.unique_declaration(), "nest() -> Nest!");
        assert_eq!(renderer.closure_signature(), "() -> Nest?");
    });
}

#[test]
fn modifier_combinations() {
    let ctx = MockContext::class("Bird");

    let overridable = Method::builder("fly").overridable(true).build().unwrap();
    with_renderer(&overridable, &ctx, |renderer| {
        assert_eq!(renderer.modifiers(true), "override ");
        assert_eq!(renderer.modifiers(false), "");
    });

    let static_method = Method::builder("reset")
        .kind(MethodKind::Class)
        .build()
        .unwrap();
    with_renderer(&static_method, &ctx, |renderer| {
        assert_eq!(renderer.modifiers(true), "static ");
    });

    let required = Method::initializer()
        .attributes(Attributes::REQUIRED)
        .overridable(true)
        .build()
        .unwrap();
    with_renderer(&required, &ctx, |renderer| {
        assert_eq!(renderer.modifiers(true), "required ");
    });

    let designated = designated_initializer();
    with_renderer(&designated, &ctx, |renderer| {
        assert_eq!(renderer.modifiers(true), "required override ");
    });
}

#[test]
fn argument_forwarding() {
    let method = Method::builder("observe")
        .parameter(Parameter::new("count", "Int").with_attributes(Attributes::INOUT))
        .parameter(
            Parameter::labeled("when", "Bool").with_attributes(Attributes::AUTOCLOSURE),
        )
        .parameter(
            Parameter::labeled("handler", "(Int) -> Void")
                .with_attributes(Attributes::CLOSURE),
        )
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    with_renderer(&method, &ctx, |renderer| {
        assert_eq!(renderer.invocation_arguments(), "&count, when(), handler");
        assert_eq!(renderer.super_call_arguments(), "count, when: when, handler: handler");
        assert_eq!(
            renderer.mock_argument_matchers(),
            "Mockingbird.ArgumentMatcher(count), Mockingbird.ArgumentMatcher(when), \
             Mockingbird.ArgumentMatcher(Mockingbird.NonEscapingClosure<(Int) -> Void>())"
        );
    });
}

// -- Initializer branches --

#[test]
fn initializer_branches() {
    let method = designated_initializer();
    let detached = Method::initializer().build().unwrap();
    let convenience = Method::initializer()
        .attributes(Attributes::CONVENIENCE)
        .build()
        .unwrap();

    let class = MockContext::class("Bird");
    let protocol = MockContext::protocol("Flyer");
    let conforming = MockContext::protocol("Flyer").with_protocol_class_conformance("NSObject");
    let shadowed = MockContext::protocol("Flyer").with_overridable_designated_initializer(true);

    let branch = |method: &Method, ctx: &MockContext| {
        with_renderer(method, ctx, |renderer| renderer.initializer_branch())
    };
    assert_eq!(branch(&convenience, &class), InitializerBranch::Convenience);
    assert_eq!(branch(&method, &class), InitializerBranch::ClassBound);
    assert_eq!(branch(&method, &conforming), InitializerBranch::ClassBound);
    assert_eq!(branch(&detached, &conforming), InitializerBranch::ProtocolOnly);
    assert_eq!(branch(&detached, &protocol), InitializerBranch::ProtocolOnly);
    assert_eq!(branch(&detached, &shadowed), InitializerBranch::Shadowed);
}

#[test]
fn convenience_initializer_renders_nothing() {
    let method = Method::initializer()
        .attributes(Attributes::CONVENIENCE)
        .compilation_directive("#if DEBUG")
        .build()
        .unwrap();
    let ctx = MockContext::class("Bird");
    let rendering = with_renderer(&method, &ctx, |renderer| renderer.render());
    assert_eq!(rendering.text, "");
    assert!(rendering.mocked.is_none());
    assert!(rendering.matchers.is_empty());
    assert!(rendering.initializer_proxies.is_empty());
}

#[test]
fn shadowed_initializer_is_deprecated() {
    let method = Method::initializer().build().unwrap();
    let ctx = MockContext::protocol("Flyer").with_overridable_designated_initializer(true);
    let rendering = with_renderer(&method, &ctx, |renderer| renderer.render());

    let expected = r#"  // MARK: Mocked init()
  @available(*, deprecated, message: "Please use 'mock(Flyer.self)' to initialize a concrete mock instance")
  public required init() {
    fatalError("Please use 'mock(Flyer.self)' to initialize a concrete mock instance")
  }"#;
    assert_eq!(rendering.text, expected);
    assert!(rendering.initializer_proxies.is_empty());
}

#[test]
fn protocol_initializer_calls_super_when_class_conforming() {
    let method = Method::initializer().build().unwrap();
    let ctx = MockContext::protocol("Flyer").with_protocol_class_conformance("NSObject");
    let rendering = with_renderer(&method, &ctx, |renderer| renderer.render());

    let expected = r#"  // MARK: Mocked init()
  public required init() {
    super.init()
    Mockingbird.checkVersion(for: self)
    let invocation: Mockingbird.Invocation = Mockingbird.Invocation(selectorName: "init()", arguments: [])
    mockingContext.didInvoke(invocation)
  }"#;
    assert_eq!(rendering.text, expected);
    assert_eq!(rendering.initializer_proxies.len(), 4);
}

// -- Assembly --

#[test]
fn directives_wrap_all_declarations() {
    let method = Method::builder("fly")
        .compilation_directive("#if os(iOS)")
        .compilation_directive("#if DEBUG")
        .declaration_attribute("@available(iOS 13, *)")
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    let rendering = with_renderer(&method, &ctx, |renderer| renderer.render());

    assert!(rendering.text.starts_with("  #if os(iOS)\n  #if DEBUG\n\n  // MARK: Mocked fly()\n  @available(iOS 13, *)\n"));
    assert!(rendering.text.ends_with("  }\n\n  #endif\n  #endif"));
    assert_eq!(rendering.text.matches("@available(iOS 13, *)").count(), 2);
}

#[test]
fn framework_module_is_configurable() {
    let method = Method::builder("fly").build().unwrap();
    let ctx = MockContext::protocol("Bird");
    let config = RenderConfig::with_framework_module("");
    let rendering = MethodRenderer::new(&method, &ctx, &config).render();
    assert!(rendering.text.contains("let invocation: Invocation = Invocation("));
    assert!(!rendering.text.contains("Mockingbird."));
}

#[test]
fn indent_width_is_configurable() {
    let method = Method::builder("fly").build().unwrap();
    let ctx = MockContext::protocol("Bird");
    let config = RenderConfig::with_indent_width(4);
    let rendering = MethodRenderer::new(&method, &ctx, &config).render();
    assert!(rendering.text.starts_with("    // MARK: Mocked fly()\n    public func fly() -> Void {\n        let invocation"));
}

// -- Matcher accessors --

#[test]
fn variadic_methods_get_two_accessors() {
    let method = Method::builder("sing")
        .parameter(Parameter::labeled("pitch", "Int"))
        .parameter(Parameter::new("notes", "Note").with_attributes(Attributes::VARIADIC))
        .build()
        .unwrap();
    let ctx = MockContext::protocol("Bird");
    let accessors = with_renderer(&method, &ctx, |renderer| renderer.render_matcher_accessors());

    assert_eq!(accessors.len(), 2);
    assert_ne!(
        accessors[0].definition_signature(),
        accessors[1].definition_signature()
    );
    assert!(accessors[0].body().contains(
        "[Mockingbird.resolve(pitch), Mockingbird.resolve(notes)]"
    ));
    assert!(accessors[1].body().contains(
        "[Mockingbird.resolve(pitch), Mockingbird.ArgumentMatcher(notes)]"
    ));
}

#[test]
fn initializers_have_no_accessors() {
    let method = designated_initializer();
    let ctx = MockContext::class("Bird");
    let accessors = with_renderer(&method, &ctx, |renderer| renderer.render_matcher_accessors());
    assert!(accessors.is_empty());
}

// -- Initializer proxies --

#[test]
fn failable_proxies_use_optional_mock() {
    let method = Method::initializer()
        .attributes(Attributes::FAILABLE | Attributes::THROWS)
        .build()
        .unwrap();
    let ctx = MockContext::class("Bird");
    let proxies = with_renderer(&method, &ctx, |renderer| renderer.render_initializer_proxies());

    let expected = r#"public func initialize(__file: StaticString = #file, __line: UInt = #line) throws -> BirdMock? {
  let mock: BirdMock? = try BirdMock()
  mock?.sourceLocation = Mockingbird.SourceLocation(__file, __line)
  return mock
}"#;
    assert_eq!(proxies[2].style(), Some(InitializerStyle::Dummy));
    assert_eq!(proxies[2].body(), expected);
}
