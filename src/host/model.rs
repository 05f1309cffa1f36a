//! Data model shared with the host media server.
//!
//! [`MediaSegment`] and [`SegmentType`] travel over the wire in the host's
//! PascalCase JSON encoding. [`MediaItem`] and [`LibraryOptions`] are the
//! minimal projections of host state the plugin reads through the
//! [`LibraryManager`](super::LibraryManager) seam.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{ItemId, LibraryId, ProviderId, SegmentId};

/// Minimal projection of a library item as the host exposes it.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Host-assigned item ID.
    pub id: ItemId,
    /// Display name, used only for logging.
    pub name: String,
    /// Library the item belongs to.
    pub library_id: LibraryId,
}

/// Per-library configuration owned by the host.
///
/// Administrators can disable individual segment providers per library; the
/// disabled set stores derived provider IDs, not display names.
#[derive(Debug, Clone, Default)]
pub struct LibraryOptions {
    /// Providers that must not write segments into this library.
    pub disabled_segment_providers: HashSet<ProviderId>,
}

impl LibraryOptions {
    /// Build options with the given providers disabled.
    pub fn with_disabled<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ProviderId>,
    {
        Self {
            disabled_segment_providers: ids.into_iter().collect(),
        }
    }

    /// Whether the given provider is disabled for this library.
    pub fn disables(&self, id: &ProviderId) -> bool {
        self.disabled_segment_providers.contains(id)
    }
}

/// Classification of a media segment.
///
/// Labels follow the host platform's segment taxonomy. Unrecognized or
/// missing labels fall back to [`SegmentType::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SegmentType {
    /// No classification.
    #[default]
    Unknown,
    /// Commercial break.
    Commercial,
    /// Preview of upcoming content.
    Preview,
    /// Recap of previous content.
    Recap,
    /// Closing credits or outro.
    Outro,
    /// Opening titles or intro.
    Intro,
}

/// A classified time range within a media item.
///
/// Positions are in ticks (100-nanosecond units), matching the host's
/// timeline convention. Field names serialize in the host's PascalCase wire
/// encoding, with the classification under the `Type` key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MediaSegment {
    /// Host-assigned segment ID. Nil until the host has stored the segment.
    #[serde(default = "SegmentId::nil")]
    pub id: SegmentId,
    /// Item the segment belongs to.
    #[serde(default = "ItemId::nil")]
    pub item_id: ItemId,
    /// Start position in ticks.
    #[serde(default)]
    pub start_ticks: i64,
    /// End position in ticks.
    #[serde(default)]
    pub end_ticks: i64,
    /// Segment classification.
    #[serde(rename = "Type", default)]
    pub kind: SegmentType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_wire_casing() {
        let segment = MediaSegment {
            id: SegmentId::new(),
            item_id: ItemId::new(),
            start_ticks: 100,
            end_ticks: 200,
            kind: SegmentType::Intro,
        };

        let value = serde_json::to_value(&segment).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["Id", "ItemId", "StartTicks", "EndTicks", "Type"] {
            assert!(keys.contains(&key), "missing wire key {key}");
        }
        assert_eq!(value["Type"], "Intro");
    }

    #[test]
    fn test_segment_minimal_body() {
        let segment: MediaSegment =
            serde_json::from_str(r#"{"StartTicks":10,"EndTicks":20,"Type":"Outro"}"#).unwrap();
        assert!(segment.id.is_nil());
        assert!(segment.item_id.is_nil());
        assert_eq!(segment.start_ticks, 10);
        assert_eq!(segment.end_ticks, 20);
        assert_eq!(segment.kind, SegmentType::Outro);
    }

    #[test]
    fn test_segment_type_defaults_to_unknown() {
        let segment: MediaSegment = serde_json::from_str(r#"{"StartTicks":0,"EndTicks":5}"#).unwrap();
        assert_eq!(segment.kind, SegmentType::Unknown);
    }

    #[test]
    fn test_segment_roundtrip() {
        let segment = MediaSegment {
            id: SegmentId::new(),
            item_id: ItemId::new(),
            start_ticks: 0,
            end_ticks: 9_000_000_000,
            kind: SegmentType::Commercial,
        };

        let json = serde_json::to_string(&segment).unwrap();
        let back: MediaSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, segment.id);
        assert_eq!(back.item_id, segment.item_id);
        assert_eq!(back.kind, SegmentType::Commercial);
    }

    #[test]
    fn test_library_options_disabled() {
        let blocked = ProviderId::from_name("intro skipper");
        let options = LibraryOptions::with_disabled([blocked.clone()]);
        assert!(options.disables(&blocked));
        assert!(!options.disables(&ProviderId::from_name("chapter segments")));
        assert!(!LibraryOptions::default().disables(&blocked));
    }
}
