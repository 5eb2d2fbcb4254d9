// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides pure domain types for image location metadata:
//! - [`GpsCoordinates`]: canonical decimal-degree pair, rounded to six places
//! - [`LocationMetadata`]: what an extraction collaborator found, as a tagged variant
//! - [`DmsAngle`] and [`Hemisphere`]: degrees/minutes/seconds form of one axis
//!
//! Extraction logic that depends on external crates (`exif`, `image`) lives in
//! `infrastructure::exif`.

mod types;

pub use types::{
    round_coordinate, DmsAngle, GpsCoordinates, Hemisphere, LocationMetadata,
    COORDINATE_DECIMALS,
};
