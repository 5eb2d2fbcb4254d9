// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Concurrency**: Bounds on simultaneous extractions
//! - **Map View**: Initial zoom levels for the marker map
//! - **Export**: Text export naming
//! - **Logging**: Default tracing filter

use std::num::NonZeroUsize;

// ==========================================================================
// Concurrency Defaults
// ==========================================================================

/// Fallback number of concurrent extractions when parallelism is unknown.
pub const DEFAULT_JOBS: usize = 4;

/// Upper bound applied to the detected parallelism when no value is configured.
pub const DEFAULT_JOBS_CAP: usize = 8;

/// Minimum number of concurrent extractions.
pub const MIN_JOBS: usize = 1;

/// Maximum number of concurrent extractions.
pub const MAX_JOBS: usize = 64;

/// Number of concurrent extractions used when nothing is configured.
#[must_use]
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(DEFAULT_JOBS)
        .min(DEFAULT_JOBS_CAP)
}

// ==========================================================================
// Map View Defaults
// ==========================================================================

/// Zoom level for a single marker, or several markers at the same spot.
pub const SINGLE_MARKER_ZOOM: u8 = 13;

/// Most zoomed-out level used for spread-out markers.
pub const MIN_MAP_ZOOM: u8 = 2;

/// Most zoomed-in level used for clustered markers.
pub const MAX_MAP_ZOOM: u8 = 16;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Prefix of generated text export file names.
pub const EXPORT_FILE_PREFIX: &str = "gps_coordinates_";

/// Extension of generated text export file names.
pub const EXPORT_FILE_EXTENSION: &str = "txt";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "geo_lens=warn";
