// src/models/mod.rs

//! Domain models for the earthquake watcher.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod feed;
mod quake;

// Re-export all public types
pub use config::{ColorMode, Config, DisplayConfig, HttpConfig};
pub use feed::Feed;
pub use quake::{DisplayRow, Feature, FeedMetadata, FeedResponse, QuakeProperties, Styled};
