//! Shared test harness for integration tests.
//!
//! Provides [`TestHost`] which wires the in-memory host services into a
//! [`PluginContext`]. The [`with_server`] constructors start Axum on a
//! random port for HTTP-level testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use media_segments_api::host::memory::{
    AllowAll, MemoryLibraryManager, MemorySegmentManager, StaticKeyPolicy,
};
use media_segments_api::host::{ElevationPolicy, LibraryId, LibraryOptions, MediaItem, ProviderId};
use media_segments_api::plugin;
use media_segments_api::segments::ProviderRegistry;
use media_segments_api::server::{create_router, PluginContext};

/// Test harness wrapping the in-memory host services behind a fully wired
/// [`PluginContext`].
pub struct TestHost {
    pub segments: Arc<MemorySegmentManager>,
    pub library: Arc<MemoryLibraryManager>,
    pub ctx: PluginContext,
}

#[allow(dead_code)]
impl TestHost {
    /// Create a host with the plugin's services registered and no
    /// authentication.
    pub fn new() -> Self {
        Self::with_policy(Arc::new(AllowAll))
    }

    /// Create a host that accepts a single API key as the elevated identity.
    pub fn with_api_key(key: &str) -> Self {
        Self::with_policy(Arc::new(StaticKeyPolicy::new(key)))
    }

    fn with_policy(policy: Arc<dyn ElevationPolicy>) -> Self {
        let segments = Arc::new(MemorySegmentManager::new());
        let library = Arc::new(MemoryLibraryManager::new());

        let mut registry = ProviderRegistry::new();
        plugin::register_services(&mut registry);

        let ctx = PluginContext {
            segment_manager: segments.clone(),
            library_manager: library.clone(),
            providers: Arc::new(registry),
            policy,
        };

        Self {
            segments,
            library,
            ctx,
        }
    }

    /// Add an item to the catalogue, returning the stored copy.
    pub fn add_item(&self, name: &str) -> MediaItem {
        self.library.add_item(name, LibraryId::new())
    }

    /// Add an item whose library disables the given provider names.
    pub fn add_item_with_disabled(&self, name: &str, disabled_providers: &[&str]) -> MediaItem {
        let library_id = LibraryId::new();
        let options = LibraryOptions::with_disabled(
            disabled_providers.iter().map(|name| ProviderId::from_name(name)),
        );
        self.library.set_library_options(library_id, options);
        self.library.add_item(name, library_id)
    }

    /// Build the plugin router over this host.
    pub fn router(&self) -> Router {
        create_router(self.ctx.clone())
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::spawn(Self::new()).await
    }

    /// Start an Axum server enforcing the given API key.
    pub async fn with_server_api_key(key: &str) -> (Self, SocketAddr) {
        Self::spawn(Self::with_api_key(key)).await
    }

    async fn spawn(host: Self) -> (Self, SocketAddr) {
        let app = host.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (host, addr)
    }
}
