//! Rendering configuration.

/// Default framework module qualifying every runtime symbol.
pub const FRAMEWORK_MODULE: &str = "Mockingbird";

/// Spaces per indentation level in generated source.
pub const INDENT_WIDTH: usize = 2;

/// Generic placeholder used by explicit and unavailable initializer proxies.
pub const GENERIC_MOCK_TYPE_NAME: &str = "__ReturnType";

/// Function name shared by all initializer proxies.
pub const INITIALIZER_PROXY_NAME: &str = "initialize";

/// Configuration for the renderer.
///
/// Shared read-only across all method renderings of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Module qualifying runtime types (`Mockingbird.Invocation`).
    pub framework_module: String,

    /// Indentation size in spaces.
    pub indent_width: usize,

    /// Generic placeholder for caller-chosen mock types.
    pub generic_mock_type_name: String,

    /// Name of the initializer proxy functions.
    pub initializer_proxy_name: String,

    /// Extra `(operator, alias)` pairs for matcher accessor names.
    ///
    /// Consulted before the built-in comparison operator table.
    pub reserved_names: Vec<(String, String)>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            framework_module: FRAMEWORK_MODULE.to_owned(),
            indent_width: INDENT_WIDTH,
            generic_mock_type_name: GENERIC_MOCK_TYPE_NAME.to_owned(),
            initializer_proxy_name: INITIALIZER_PROXY_NAME.to_owned(),
            reserved_names: Vec::new(),
        }
    }
}

impl RenderConfig {
    /// Create a config qualifying runtime symbols with `module`.
    pub fn with_framework_module(module: impl Into<String>) -> Self {
        Self {
            framework_module: module.into(),
            ..Default::default()
        }
    }

    /// Create a config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }

    /// Register an additional matcher alias for an operator name.
    #[must_use]
    pub fn reserve_name(mut self, operator: impl Into<String>, alias: impl Into<String>) -> Self {
        self.reserved_names.push((operator.into(), alias.into()));
        self
    }

    /// Qualify a runtime symbol with the framework module.
    pub fn qualified(&self, symbol: &str) -> String {
        if self.framework_module.is_empty() {
            symbol.to_owned()
        } else {
            format!("{}.{symbol}", self.framework_module)
        }
    }
}
