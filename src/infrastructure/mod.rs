// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! `kamadak-exif`, `image`, and system I/O.
//!
//! # Available Adapters
//!
//! - [`kamadak`]: EXIF GPS reading via `kamadak-exif` (implements [`LocationReader`])
//! - [`source`]: Filesystem and in-memory files (implement [`ImageSource`])
//!
//! [`LocationReader`]: crate::application::port::LocationReader
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod kamadak;
pub mod source;

// Re-export main types for convenience
pub use kamadak::ExifLocationReader;
pub use source::{FileSource, MemorySource};
