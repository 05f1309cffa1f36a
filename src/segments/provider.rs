//! Trait definition and types for segment providers.
//!
//! This module defines the [`SegmentProvider`] trait that all segment
//! backends must implement, along with the request type the host passes to a
//! generation run.

use async_trait::async_trait;

use crate::host::ids::ItemId;
use crate::host::model::{MediaItem, MediaSegment};

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// Parameters for one segment generation pass over a single item.
#[derive(Debug, Clone)]
pub struct SegmentRequest {
    /// Item to produce segments for.
    pub item_id: ItemId,
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Async trait that all segment providers must implement.
///
/// A provider inspects media items and produces classified time ranges
/// (intros, credits, commercials, and so on). Scheduling generation runs is
/// the host's business; this plugin registers one provider of its own and
/// checks provider identity on its API surface.
///
/// Providers are expected to be wrapped in an `Arc` so they can be shared
/// across tasks.
#[async_trait]
pub trait SegmentProvider: Send + Sync {
    /// Display name of this provider. The derived
    /// [`ProviderId`](crate::host::ids::ProviderId) comes from this string.
    fn name(&self) -> &'static str;

    /// Position in the host's execution order. Lower runs first; providers
    /// that do not care report `0`.
    fn order(&self) -> i32 {
        0
    }

    /// Returns `true` when the provider can produce segments for `item` at
    /// all. Hosts skip unsupported items without calling [`segments`].
    ///
    /// [`segments`]: SegmentProvider::segments
    async fn supports(&self, item: &MediaItem) -> bool;

    /// Produce the segments this provider knows for the requested item.
    async fn segments(&self, request: &SegmentRequest) -> anyhow::Result<Vec<MediaSegment>>;
}
