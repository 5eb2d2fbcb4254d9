// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading domain data.
//! These services do not modify state; they provide read-only access.
//!
//! # Available Services
//!
//! - [`map_view`]: Map markers and initial viewport (`MapView`)

pub mod map_view;

// Re-export main types
pub use map_view::{MapMarker, MapView};
