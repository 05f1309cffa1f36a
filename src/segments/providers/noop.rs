//! The plugin's own segment provider.

use async_trait::async_trait;

use crate::host::model::{MediaItem, MediaSegment};
use crate::plugin;
use crate::segments::provider::{SegmentProvider, SegmentRequest};

/// Segment provider registered by this plugin.
///
/// The plugin contributes a management API, not segment generation, so this
/// provider deliberately supplies nothing: it supports no items and returns
/// no segments. Registering it still claims a stable derived ID under the
/// plugin's name, which hosts show in their provider lists and accept in
/// per-library disable settings.
pub struct NoOpSegmentProvider;

impl NoOpSegmentProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSegmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SegmentProvider for NoOpSegmentProvider {
    fn name(&self) -> &'static str {
        plugin::PLUGIN_NAME
    }

    async fn supports(&self, _item: &MediaItem) -> bool {
        false
    }

    async fn segments(&self, _request: &SegmentRequest) -> anyhow::Result<Vec<MediaSegment>> {
        Ok(Vec::new())
    }
}
