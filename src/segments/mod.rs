//! Segment provider system.
//!
//! This module defines the [`SegmentProvider`] trait hosts schedule for
//! segment generation, the [`ProviderRegistry`] that tracks installed
//! providers, and the plugin's own no-op provider.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition and the generation request type.
//! - [`providers`] -- Concrete provider implementations.
//! - [`registry`] -- Ordered registry with per-library activity checks.

pub mod provider;
pub mod providers;
pub mod registry;

pub use provider::{SegmentProvider, SegmentRequest};
pub use providers::NoOpSegmentProvider;
pub use registry::ProviderRegistry;
