//! Rendering many methods of one mockable type.
//!
//! Methods of a type render independently against the same read-only
//! context, so they are fanned out over the rayon pool. Results come back in
//! input order.

use mockgen_ir::{Method, MockingContext};
use rayon::prelude::*;

use crate::artifact::ArtifactSet;
use crate::config::RenderConfig;
use crate::renderer::{MethodRenderer, MethodRendering};

/// Render every method in parallel, preserving input order.
pub fn render_methods<C: MockingContext + Sync + ?Sized>(
    methods: &[Method],
    ctx: &C,
    config: &RenderConfig,
) -> Vec<MethodRendering> {
    tracing::debug!(
        mock = ctx.scoped_mock_type_name(),
        methods = methods.len(),
        "rendering methods"
    );
    methods
        .par_iter()
        .map(|method| MethodRenderer::new(method, ctx, config).render())
        .collect()
}

/// Gather the initializer proxies of all renderings.
///
/// Inherited initializers with identical signatures produce identical
/// proxies; only the first of each is kept.
pub fn collect_initializer_proxies<'a>(
    renderings: impl IntoIterator<Item = &'a MethodRendering>,
) -> ArtifactSet {
    renderings
        .into_iter()
        .flat_map(|rendering| rendering.initializer_proxies.iter().cloned())
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on invalid models"
)]
