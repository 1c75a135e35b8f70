//! Rendered declarations and signature-keyed collections of them.
//!
//! Every renderer returns a [`RenderedArtifact`]: the emitted text plus the
//! signature it declares. Two artifacts with the same signature declare the
//! same thing, so equality and hashing look at the signature only. This is
//! what lets an aggregator collapse identical initializer proxies reached
//! through several inherited initializers.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHashSet;

/// The four initializer proxy flavors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InitializerStyle {
    /// Returns the abstract mock protocol; the caller lets inference decide.
    Implicit,
    /// Returns a caller-annotated generic mock type via forced cast.
    Explicit,
    /// Returns the concrete mock type as a plain dummy object.
    Dummy,
    /// Obsoleted overload that steers ambiguous calls elsewhere.
    Unavailable,
}

impl InitializerStyle {
    /// All styles in emission order.
    pub const ALL: [InitializerStyle; 4] = [
        InitializerStyle::Implicit,
        InitializerStyle::Explicit,
        InitializerStyle::Dummy,
        InitializerStyle::Unavailable,
    ];
}

/// One emitted declaration.
#[derive(Clone, Debug)]
pub struct RenderedArtifact {
    definition_signature: String,
    body: String,
    style: Option<InitializerStyle>,
}

impl RenderedArtifact {
    pub fn new(definition_signature: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            definition_signature: definition_signature.into(),
            body: body.into(),
            style: None,
        }
    }

    pub fn initializer_proxy(
        definition_signature: impl Into<String>,
        body: impl Into<String>,
        style: InitializerStyle,
    ) -> Self {
        Self {
            definition_signature: definition_signature.into(),
            body: body.into(),
            style: Some(style),
        }
    }

    /// De-duplication key.
    pub fn definition_signature(&self) -> &str {
        &self.definition_signature
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn style(&self) -> Option<InitializerStyle> {
        self.style
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl PartialEq for RenderedArtifact {
    fn eq(&self, other: &Self) -> bool {
        self.definition_signature == other.definition_signature
    }
}

impl Eq for RenderedArtifact {}

impl Hash for RenderedArtifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition_signature.hash(state);
    }
}

/// Ordered set of artifacts, unique by signature.
///
/// The first artifact inserted for a signature wins and keeps its position,
/// so output order only depends on insertion order.
#[derive(Clone, Debug, Default)]
pub struct ArtifactSet {
    artifacts: Vec<RenderedArtifact>,
    signatures: FxHashSet<String>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact, returning `false` if its signature is already present.
    pub fn insert(&mut self, artifact: RenderedArtifact) -> bool {
        if self.signatures.contains(artifact.definition_signature()) {
            tracing::trace!(
                signature = artifact.definition_signature(),
                "collapsed duplicate declaration"
            );
            return false;
        }
        self.signatures
            .insert(artifact.definition_signature().to_owned());
        self.artifacts.push(artifact);
        true
    }

    pub fn contains(&self, definition_signature: &str) -> bool {
        self.signatures.contains(definition_signature)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderedArtifact> {
        self.artifacts.iter()
    }

    pub fn into_vec(self) -> Vec<RenderedArtifact> {
        self.artifacts
    }

    /// Join all bodies with a blank line, in insertion order.
    pub fn render(&self) -> String {
        self.artifacts
            .iter()
            .map(RenderedArtifact::body)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Extend<RenderedArtifact> for ArtifactSet {
    fn extend<T: IntoIterator<Item = RenderedArtifact>>(&mut self, iter: T) {
        for artifact in iter {
            self.insert(artifact);
        }
    }
}

impl FromIterator<RenderedArtifact> for ArtifactSet {
    fn from_iter<T: IntoIterator<Item = RenderedArtifact>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a RenderedArtifact;
    type IntoIter = std::slice::Iter<'a, RenderedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
