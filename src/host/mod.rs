//! Contract surface between the plugin and its host media server.
//!
//! The plugin owns no storage and no user database. Everything it needs from
//! the surrounding server goes through the traits in this module, so a host
//! embeds the plugin by supplying three implementations and mounting the
//! router.
//!
//! # Module layout
//!
//! - [`ids`] -- Typed identifiers, including derived provider IDs.
//! - [`model`] -- Wire types and host state projections.
//! - [`error`] -- Error type shared by the service seams.
//! - [`memory`] -- In-memory reference implementations for tests and the
//!   dev server.

pub mod error;
pub mod ids;
pub mod memory;
pub mod model;

use async_trait::async_trait;

pub use error::{HostError, Result};
pub use ids::{ItemId, LibraryId, ProviderId, SegmentId};
pub use model::{LibraryOptions, MediaItem, MediaSegment, SegmentType};

/// Host-owned segment store the plugin forwards writes to.
#[async_trait]
pub trait SegmentManager: Send + Sync {
    /// Persist a segment on behalf of the provider identified by
    /// `provider_id`, assigning its ID. Returns the stored copy.
    async fn create_segment(
        &self,
        segment: MediaSegment,
        provider_id: &ProviderId,
    ) -> Result<MediaSegment>;

    /// Remove a segment. Unknown IDs are not an error.
    async fn delete_segment(&self, id: SegmentId) -> Result<()>;
}

/// Host-owned library catalogue.
pub trait LibraryManager: Send + Sync {
    /// Resolve an item by ID.
    fn item(&self, id: ItemId) -> Option<MediaItem>;

    /// Options of the library the item belongs to.
    fn library_options(&self, item: &MediaItem) -> LibraryOptions;
}

/// Outcome of an [`ElevationPolicy`] check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The caller holds elevated rights.
    Granted,
    /// No usable credentials were presented.
    Unauthenticated,
    /// Credentials were presented but do not carry elevated rights.
    Forbidden,
}

/// Host policy deciding whether a caller may reach the plugin routes.
///
/// Every route requires elevation; there are no per-route exceptions.
#[async_trait]
pub trait ElevationPolicy: Send + Sync {
    /// Judge the bearer token presented with a request, if any.
    async fn authorize(&self, bearer_token: Option<&str>) -> AccessDecision;
}
