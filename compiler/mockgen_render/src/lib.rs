//! Mockgen Render
//!
//! Generates the mock-side declarations of a single method: the mocked
//! override, its matcher accessor(s) and, for initializers, the four
//! initializer proxies.
//!
//! # Architecture
//!
//! Rendering is a pure function of a [`Method`], its enclosing
//! [`MockingContext`] and a [`RenderConfig`]:
//!
//! 1. **Naming**: [`MethodRenderer::full_name`] derives the declaration head
//!    under a [`FullNameMode`]; the mocking-mode name doubles as the
//!    invocation selector
//! 2. **Rendering**: each renderer writes lines through a [`SourceWriter`] and
//!    returns a [`RenderedArtifact`] keyed by its declared signature
//! 3. **Assembly**: declarations are wrapped in the method's compilation
//!    directives and joined with blank lines
//!
//! # Modules
//!
//! - [`config`]: rendering configuration
//! - [`emitter`]: output abstraction
//! - [`writer`]: indentation-aware line writer
//! - [`artifact`]: rendered declarations and signature-keyed sets

pub mod artifact;
mod batch;
pub mod config;
pub mod emitter;
mod renderer;
pub mod writer;

use std::sync::Once;

pub use artifact::{ArtifactSet, InitializerStyle, RenderedArtifact};
pub use batch::{collect_initializer_proxies, render_methods};
pub use config::RenderConfig;
pub use emitter::{Emitter, StringEmitter};
pub use renderer::{
    FullNameMode, InitializerBranch, MethodRenderer, MethodRendering, RESERVED_NAMES,
};
pub use writer::SourceWriter;

use mockgen_ir::{Method, MockingContext};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Reads the `RUST_LOG` environment variable for filter configuration.
/// Does nothing when `RUST_LOG` is unset, and only installs a subscriber once.
///
/// # Example
///
/// ```bash
/// RUST_LOG=mockgen_render=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Render one method against its context.
///
/// Shorthand for building a [`MethodRenderer`] and calling
/// [`MethodRenderer::render`].
pub fn render_method<C: MockingContext + ?Sized>(
    method: &Method,
    ctx: &C,
    config: &RenderConfig,
) -> MethodRendering {
    MethodRenderer::new(method, ctx, config).render()
}
