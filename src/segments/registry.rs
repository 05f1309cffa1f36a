//! Provider registry for managing multiple [`SegmentProvider`] implementations.
//!
//! The [`ProviderRegistry`] mirrors the host's view of installed segment
//! providers: an ordered list plus the per-library activity filter the
//! management API checks before accepting writes.

use std::sync::Arc;

use super::provider::SegmentProvider;
use crate::host::ids::ProviderId;
use crate::host::model::LibraryOptions;

/// A registry that manages multiple [`SegmentProvider`] implementations.
///
/// Providers are kept sorted by [`SegmentProvider::order`], with registration
/// order breaking ties. A provider is *active* for a library when its derived
/// ID is absent from that library's disabled list.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use media_segments_api::segments::ProviderRegistry;
///
/// let mut registry = ProviderRegistry::new();
/// registry.register(Arc::new(my_provider));
///
/// let active = registry.active_ids(&library_options);
/// ```
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn SegmentProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry with no providers.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a new segment provider.
    ///
    /// The list stays sorted by ascending [`SegmentProvider::order`];
    /// providers reporting the same order keep their registration order.
    pub fn register(&mut self, provider: Arc<dyn SegmentProvider>) {
        self.providers.push(provider);
        self.providers.sort_by_key(|p| p.order());
    }

    /// All registered providers in execution order.
    pub fn providers(&self) -> &[Arc<dyn SegmentProvider>] {
        &self.providers
    }

    /// Look up a provider by its [`SegmentProvider::name`].
    ///
    /// Returns `None` if no provider with the given name has been registered.
    pub fn get(&self, name: &str) -> Option<&dyn SegmentProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Derived IDs of the providers active for a library, in execution order.
    ///
    /// A provider is active unless the library's options disable its ID.
    pub fn active_ids(&self, options: &LibraryOptions) -> Vec<ProviderId> {
        self.providers
            .iter()
            .map(|p| ProviderId::from_name(p.name()))
            .filter(|id| !options.disables(id))
            .collect()
    }

    /// Whether `id` belongs to a registered provider that is active for the
    /// given library.
    pub fn is_active(&self, id: &ProviderId, options: &LibraryOptions) -> bool {
        self.active_ids(options).contains(id)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
