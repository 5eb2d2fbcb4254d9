// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`metadata`]: Location metadata reading (EXIF GPS)
//! - [`source`]: Input files (name + bytes)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `exif` or `image` types)
//! - Traits are `Send + Sync` so batches can fan out across threads
//! - No `async fn` - callers move blocking work onto `tokio`'s blocking pool

pub mod metadata;
pub mod source;

// Re-export main types for convenience
pub use metadata::{LocationReader, MetadataError};
pub use source::ImageSource;
