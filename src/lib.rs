//! Media Segments API - segment management plugin for media server hosts
//!
//! This library crate exposes the plugin surface: the host service seams
//! ([`host`]), the segment provider system ([`segments`]), the mountable
//! HTTP router ([`server`]), and the registration hooks ([`plugin`]).

pub mod config;
pub mod host;
pub mod plugin;
pub mod segments;
pub mod server;
