//! Read-only content snapshots
//!
//! The comparison view never reads the live document. Each suggestion gets a
//! pair of immutable snapshots (original text and proposed text) registered
//! under synthetic scheme-qualified URIs for the lifetime of the diff
//! session.

use crate::document::DocUri;

/// Scheme for the captured original text
pub const ORIGINAL_SCHEME: &str = "ai-original";
/// Scheme for the proposed replacement text
pub const PROPOSED_SCHEME: &str = "ai-proposed";
/// Common prefix of both synthetic schemes, used for scoped disposal
pub const SCHEME_PREFIX: &str = "ai-";

/// An immutable text snapshot addressable by URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotProvider {
    uri: DocUri,
    content: String,
}

impl SnapshotProvider {
    /// Capture the original text of the target range
    pub fn original(name: &str, content: String) -> Self {
        SnapshotProvider {
            uri: DocUri::synthetic(ORIGINAL_SCHEME, name),
            content,
        }
    }

    /// Capture the proposed replacement text
    pub fn proposed(name: &str, content: String) -> Self {
        SnapshotProvider {
            uri: DocUri::synthetic(PROPOSED_SCHEME, name),
            content,
        }
    }

    pub fn uri(&self) -> &DocUri {
        &self.uri
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Registry mapping synthetic URIs to their snapshot content
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: Vec<SnapshotProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        ProviderRegistry {
            providers: Vec::new(),
        }
    }

    /// Register a provider; a provider already registered under the same
    /// URI is replaced
    pub fn register(&mut self, provider: SnapshotProvider) {
        self.providers.retain(|p| p.uri() != provider.uri());
        self.providers.push(provider);
    }

    /// Resolve a synthetic URI to its snapshot content
    pub fn resolve(&self, uri: &DocUri) -> Option<&str> {
        self.providers
            .iter()
            .find(|p| p.uri() == uri)
            .map(|p| p.content())
    }

    /// Drop every provider whose scheme starts with the given prefix.
    /// Returns how many were dropped.
    pub fn dispose_scheme_prefix(&mut self, prefix: &str) -> usize {
        let before = self.providers.len();
        self.providers.retain(|p| !p.uri().scheme().starts_with(prefix));
        before - self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_uris_use_synthetic_schemes() {
        let orig = SnapshotProvider::original("main.rs", "old".into());
        let prop = SnapshotProvider::proposed("main.rs", "new".into());
        assert_eq!(orig.uri().as_str(), "ai-original:main.rs");
        assert_eq!(prop.uri().as_str(), "ai-proposed:main.rs");
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ProviderRegistry::new();
        registry.register(SnapshotProvider::original("a.rs", "alpha".into()));
        let uri = DocUri::synthetic(ORIGINAL_SCHEME, "a.rs");
        assert_eq!(registry.resolve(&uri), Some("alpha"));
    }

    #[test]
    fn test_resolve_unknown_uri_is_none() {
        let registry = ProviderRegistry::new();
        assert_eq!(registry.resolve(&DocUri::file("a.rs")), None);
    }

    #[test]
    fn test_reregister_same_uri_replaces() {
        let mut registry = ProviderRegistry::new();
        registry.register(SnapshotProvider::original("a.rs", "one".into()));
        registry.register(SnapshotProvider::original("a.rs", "two".into()));
        assert_eq!(registry.len(), 1);
        let uri = DocUri::synthetic(ORIGINAL_SCHEME, "a.rs");
        assert_eq!(registry.resolve(&uri), Some("two"));
    }

    #[test]
    fn test_dispose_scheme_prefix_only_drops_matching() {
        let mut registry = ProviderRegistry::new();
        registry.register(SnapshotProvider::original("a.rs", "old".into()));
        registry.register(SnapshotProvider::proposed("a.rs", "new".into()));
        registry.register(SnapshotProvider {
            uri: DocUri::file("other.rs"),
            content: "keep".into(),
        });

        let dropped = registry.dispose_scheme_prefix(SCHEME_PREFIX);
        assert_eq!(dropped, 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&DocUri::file("other.rs")), Some("keep"));
    }

    #[test]
    fn test_snapshot_content_is_immutable_capture() {
        let mut registry = ProviderRegistry::new();
        let live = String::from("captured at creation");
        registry.register(SnapshotProvider::original("a.rs", live.clone()));
        // mutating the source string after capture changes nothing
        drop(live);
        let uri = DocUri::synthetic(ORIGINAL_SCHEME, "a.rs");
        assert_eq!(registry.resolve(&uri), Some("captured at creation"));
    }
}
