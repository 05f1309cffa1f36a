//! Concrete segment provider implementations.
//!
//! Each submodule implements the [`SegmentProvider`](super::SegmentProvider)
//! trait for one segment source.

pub mod noop;

pub use noop::NoOpSegmentProvider;
