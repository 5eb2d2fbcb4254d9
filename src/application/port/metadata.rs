// SPDX-License-Identifier: MPL-2.0
//! Location metadata reading port.
//!
//! Infrastructure adapters implement [`LocationReader`] with libraries like
//! `kamadak-exif` and `image`. The port only speaks domain types: whatever the
//! library returns is turned into a [`LocationMetadata`] variant before it
//! leaves the adapter.

use crate::domain::metadata::LocationMetadata;
use std::fmt;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors a reader can report instead of location metadata.
///
/// "No GPS data" is not an error: readers return [`LocationMetadata::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// The bytes could not be decoded as an image.
    Unreadable(String),

    /// The reader failed for another reason (corrupt EXIF block, malformed tag).
    ExtractionFailed(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Unreadable(msg) => write!(f, "Unreadable image: {msg}"),
            MetadataError::ExtractionFailed(msg) => {
                write!(f, "Failed to read metadata: {msg}")
            }
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// LocationReader Trait
// =============================================================================

/// Port for reading location metadata from image bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a batch can share one reader
/// across worker threads.
///
/// # Example
///
/// ```ignore
/// use geo_lens::application::port::LocationReader;
///
/// fn has_location(reader: &impl LocationReader, bytes: &[u8]) -> bool {
///     reader
///         .read_location(bytes)
///         .is_ok_and(|location| !location.is_absent())
/// }
/// ```
pub trait LocationReader: Send + Sync {
    /// Reads the location block from in-memory file content.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if the bytes are not a decodable image or
    /// the metadata cannot be parsed.
    fn read_location(&self, bytes: &[u8]) -> Result<LocationMetadata, MetadataError>;
}

impl<T: LocationReader + ?Sized> LocationReader for std::sync::Arc<T> {
    fn read_location(&self, bytes: &[u8]) -> Result<LocationMetadata, MetadataError> {
        (**self).read_location(bytes)
    }
}
