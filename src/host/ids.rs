//! Typed ID wrappers shared between the plugin and its host.
//!
//! This module provides newtype wrappers around UUIDs to prevent mixing
//! different kinds of identifiers (e.g., using a SegmentId where an ItemId is
//! expected), plus the string-typed [`ProviderId`] hosts derive from provider
//! display names.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a library item (movie, episode, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a new random item ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero item ID, used where no item has been named yet.
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the all-zero placeholder ID.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ItemId> for Uuid {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a media segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct SegmentId(Uuid);

impl SegmentId {
    /// Generate a new random segment ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero segment ID, used before the host assigns the real one.
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the all-zero placeholder ID.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SegmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SegmentId> for Uuid {
    fn from(id: SegmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a media library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(Uuid);

impl LibraryId {
    /// Generate a new random library ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LibraryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LibraryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<LibraryId> for Uuid {
    fn from(id: LibraryId) -> Self {
        id.0
    }
}

impl std::fmt::Display for LibraryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived identifier for a media segment provider.
///
/// Hosts address providers by the MD5 digest of their lowercased display
/// name, rendered as 32 lowercase hex characters. Per-library disabled
/// lists store these same digests, so a [`ProviderId`] is comparable across
/// the whole host without any registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Derive the provider ID for a display name.
    ///
    /// The name is lowercased before hashing, so the same provider resolves
    /// to the same ID no matter how a caller cases it.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut hasher = Md5::new();
        hasher.update(name.to_lowercase().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// The digest as a 32-character lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProviderId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ProviderId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_creation() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_item_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let item_id = ItemId::from(uuid);
        let uuid_back: Uuid = item_id.into();
        assert_eq!(uuid, uuid_back);
    }

    #[test]
    fn test_segment_id_serialization() {
        let id = SegmentId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: SegmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_segment_id_nil() {
        let nil = SegmentId::nil();
        assert!(nil.is_nil());
        assert!(!SegmentId::new().is_nil());
    }

    #[test]
    fn test_library_id_display() {
        let id = LibraryId::new();
        let display = format!("{}", id);
        assert!(!display.is_empty());
    }

    #[test]
    fn test_different_id_types() {
        let uuid = Uuid::new_v4();
        let _item_id = ItemId::from(uuid);
        let _segment_id = SegmentId::from(uuid);
        // Type system prevents mixing these at compile time
    }

    #[test]
    fn test_provider_id_known_digest() {
        let id = ProviderId::from_name("intro skipper");
        assert_eq!(id.as_str(), "f99a7dc02b79b1660eaedf1bc2091040");
    }

    #[test]
    fn test_provider_id_case_insensitive() {
        assert_eq!(
            ProviderId::from_name("Intro Skipper"),
            ProviderId::from_name("INTRO SKIPPER"),
        );
    }

    #[test]
    fn test_provider_id_format() {
        let id = ProviderId::from_name("Media Segments API");
        assert_eq!(id.as_str().len(), 32);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_provider_id_distinct_names() {
        assert_ne!(
            ProviderId::from_name("intro skipper"),
            ProviderId::from_name("chapter segments"),
        );
    }

    #[test]
    fn test_provider_id_serialization() {
        let id = ProviderId::from_name("intro skipper");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"f99a7dc02b79b1660eaedf1bc2091040\"");
        let deserialized: ProviderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
