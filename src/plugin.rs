//! Plugin identity and host registration hooks.
//!
//! Hosts identify plugins by a fixed GUID and a display name; the provider
//! ID derived from that name is how the plugin's own segment provider shows
//! up in library settings.

use std::sync::Arc;

use uuid::Uuid;

use crate::host::ids::ProviderId;
use crate::segments::{NoOpSegmentProvider, ProviderRegistry};

/// Display name hosts show for this plugin.
pub const PLUGIN_NAME: &str = "Media Segments API";

/// Stable GUID identifying this plugin to hosts.
pub const PLUGIN_ID: Uuid = uuid::uuid!("1e7b29e1-f57e-4ac9-a261-7e414d285df6");

/// Identity of this plugin as reported to hosts.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub name: &'static str,
    pub id: Uuid,
    pub version: String,
}

impl PluginInfo {
    /// Identity of the running build.
    pub fn current() -> Self {
        Self {
            name: PLUGIN_NAME,
            id: PLUGIN_ID,
            version: version(),
        }
    }
}

/// Crate version rendered as exactly three dot-separated integers.
pub fn version() -> String {
    format!(
        "{}.{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
    )
}

/// Derived ID of the plugin's own segment provider.
pub fn provider_id() -> ProviderId {
    ProviderId::from_name(PLUGIN_NAME)
}

/// Install this plugin's services into the host's provider registry.
///
/// Hosts call this once at plugin load, before mounting the router.
pub fn register_services(registry: &mut ProviderRegistry) {
    registry.register(Arc::new(NoOpSegmentProvider::new()));
}
