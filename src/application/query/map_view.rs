// SPDX-License-Identifier: MPL-2.0
//! Map view query.
//!
//! Derives what a map widget needs from a [`ResultSet`]: one marker per
//! located file, plus an initial center and zoom level. Files without
//! coordinates are left out; each marker keeps the input index of its file so
//! a list view and the map can point at the same row.

use crate::config::defaults::{MAX_MAP_ZOOM, MIN_MAP_ZOOM, SINGLE_MARKER_ZOOM};
use crate::domain::extraction::ResultSet;
use crate::domain::metadata::GpsCoordinates;

/// Spans below this many degrees are treated as a single spot.
const SAME_SPOT_SPAN_DEGREES: f64 = 1e-6;

/// One marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Position of the file in the batch input.
    pub index: usize,
    pub name: String,
    pub coordinates: GpsCoordinates,
}

/// Markers plus the initial viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// Centroid of all marker positions.
    pub center: GpsCoordinates,
    pub zoom: u8,
}

impl MapView {
    /// Builds the map view, or `None` when no file has coordinates.
    #[must_use]
    pub fn from_results(results: &ResultSet) -> Option<Self> {
        let markers: Vec<MapMarker> = results
            .located()
            .map(|(index, result, coordinates)| MapMarker {
                index,
                name: result.name().to_string(),
                coordinates,
            })
            .collect();

        if markers.is_empty() {
            return None;
        }

        let count = markers.len() as f64;
        let (lat_sum, lon_sum) = markers.iter().fold((0.0, 0.0), |(lat, lon), m| {
            (lat + m.coordinates.latitude(), lon + m.coordinates.longitude())
        });
        let center = GpsCoordinates::rounded(lat_sum / count, lon_sum / count)?;
        let zoom = zoom_for_markers(&markers);

        Some(Self {
            markers,
            center,
            zoom,
        })
    }

    /// Finds the marker for a given input index.
    #[must_use]
    pub fn marker_for_index(&self, index: usize) -> Option<&MapMarker> {
        self.markers.iter().find(|m| m.index == index)
    }
}

/// Picks a zoom level so that all markers fit in a world-width viewport.
fn zoom_for_markers(markers: &[MapMarker]) -> u8 {
    if markers.len() < 2 {
        return SINGLE_MARKER_ZOOM;
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    for marker in markers {
        min_lat = min_lat.min(marker.coordinates.latitude());
        max_lat = max_lat.max(marker.coordinates.latitude());
        min_lon = min_lon.min(marker.coordinates.longitude());
        max_lon = max_lon.max(marker.coordinates.longitude());
    }

    let span = (max_lat - min_lat).max(max_lon - min_lon);
    zoom_for_span(span)
}

fn zoom_for_span(span: f64) -> u8 {
    if span < SAME_SPOT_SPAN_DEGREES {
        return SINGLE_MARKER_ZOOM;
    }
    let level = (360.0 / span).log2().floor();
    level.clamp(f64::from(MIN_MAP_ZOOM), f64::from(MAX_MAP_ZOOM)) as u8
}
