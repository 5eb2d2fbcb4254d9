// SPDX-License-Identifier: MPL-2.0
//! JSON report of a batch, for machine consumption.
//!
//! The domain types stay free of serde; this module maps them onto
//! serializable report structs.

use crate::application::query::MapView;
use crate::domain::extraction::ResultSet;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub summary: JsonSummary,
    pub results: Vec<JsonEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<JsonMapView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSummary {
    pub located: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonEntry {
    pub index: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<JsonFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonFailure {
    /// Stable category identifier, e.g. `unreadable_file`.
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMapView {
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<JsonMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMarker {
    pub index: usize,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl JsonReport {
    #[must_use]
    pub fn new(results: &ResultSet) -> Self {
        let summary = results.summary();
        let entries = results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let coordinates = result.coordinates();
                JsonEntry {
                    index,
                    name: result.name().to_string(),
                    latitude: coordinates.map(|c| c.latitude()),
                    longitude: coordinates.map(|c| c.longitude()),
                    map_url: coordinates.map(|c| c.map_url()),
                    failure: result.failure_reason().map(|reason| JsonFailure {
                        category: reason.category().to_string(),
                        message: reason.to_string(),
                    }),
                }
            })
            .collect();

        Self {
            summary: JsonSummary {
                located: summary.located,
                total: summary.total,
            },
            results: entries,
            map: MapView::from_results(results).map(JsonMapView::from),
        }
    }
}

impl From<MapView> for JsonMapView {
    fn from(view: MapView) -> Self {
        Self {
            center: [view.center.latitude(), view.center.longitude()],
            zoom: view.zoom,
            markers: view
                .markers
                .into_iter()
                .map(|m| JsonMarker {
                    index: m.index,
                    name: m.name,
                    latitude: m.coordinates.latitude(),
                    longitude: m.coordinates.longitude(),
                })
                .collect(),
        }
    }
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(results))?)
}
