//! In-memory reference implementations of the host services.
//!
//! These back the standalone dev server and the integration tests. A real
//! host replaces them with adapters over its own storage, library catalogue,
//! and session handling.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::error::Result;
use super::ids::{ItemId, LibraryId, ProviderId, SegmentId};
use super::model::{LibraryOptions, MediaItem, MediaSegment};
use super::{AccessDecision, ElevationPolicy, LibraryManager, SegmentManager};

/// Segment store backed by a concurrent map.
#[derive(Default)]
pub struct MemorySegmentManager {
    segments: DashMap<SegmentId, MediaSegment>,
    providers: DashMap<SegmentId, ProviderId>,
    creates: AtomicU64,
}

impl MemorySegmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create calls observed since construction.
    pub fn create_calls(&self) -> u64 {
        self.creates.load(Ordering::Relaxed)
    }

    /// Fetch a stored segment by ID.
    pub fn get(&self, id: SegmentId) -> Option<MediaSegment> {
        self.segments.get(&id).map(|entry| entry.clone())
    }

    /// Provider recorded for a stored segment.
    pub fn provider_of(&self, id: SegmentId) -> Option<ProviderId> {
        self.providers.get(&id).map(|entry| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[async_trait]
impl SegmentManager for MemorySegmentManager {
    async fn create_segment(
        &self,
        mut segment: MediaSegment,
        provider_id: &ProviderId,
    ) -> Result<MediaSegment> {
        self.creates.fetch_add(1, Ordering::Relaxed);
        if segment.id.is_nil() {
            segment.id = SegmentId::new();
        }
        self.segments.insert(segment.id, segment.clone());
        self.providers.insert(segment.id, provider_id.clone());
        Ok(segment)
    }

    async fn delete_segment(&self, id: SegmentId) -> Result<()> {
        self.segments.remove(&id);
        self.providers.remove(&id);
        Ok(())
    }
}

/// Library catalogue backed by concurrent maps.
#[derive(Default)]
pub struct MemoryLibraryManager {
    items: DashMap<ItemId, MediaItem>,
    options: DashMap<LibraryId, LibraryOptions>,
}

impl MemoryLibraryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the catalogue and return the stored copy.
    pub fn add_item(&self, name: &str, library_id: LibraryId) -> MediaItem {
        let item = MediaItem {
            id: ItemId::new(),
            name: name.to_string(),
            library_id,
        };
        self.items.insert(item.id, item.clone());
        item
    }

    /// Replace the options of a library.
    pub fn set_library_options(&self, library_id: LibraryId, options: LibraryOptions) {
        self.options.insert(library_id, options);
    }
}

impl LibraryManager for MemoryLibraryManager {
    fn item(&self, id: ItemId) -> Option<MediaItem> {
        self.items.get(&id).map(|entry| entry.clone())
    }

    fn library_options(&self, item: &MediaItem) -> LibraryOptions {
        self.options
            .get(&item.library_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}

/// Policy that grants every request. Stands in for a host running with
/// authorization disabled.
pub struct AllowAll;

#[async_trait]
impl ElevationPolicy for AllowAll {
    async fn authorize(&self, _bearer_token: Option<&str>) -> AccessDecision {
        AccessDecision::Granted
    }
}

/// Policy that treats a single fixed API key as the only elevated identity.
pub struct StaticKeyPolicy {
    key: String,
}

impl StaticKeyPolicy {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl ElevationPolicy for StaticKeyPolicy {
    async fn authorize(&self, bearer_token: Option<&str>) -> AccessDecision {
        match bearer_token {
            None => AccessDecision::Unauthenticated,
            Some(token) if token == self.key => AccessDecision::Granted,
            Some(_) => AccessDecision::Forbidden,
        }
    }
}
