// SPDX-License-Identifier: MPL-2.0
//! Batch result exports.
//!
//! - [`text`]: human-readable report that can be parsed back
//! - [`json`]: serde report including the map view

pub mod json;
pub mod text;

pub use json::{render_json, JsonReport};
pub use text::{
    default_export_file_name, export_file_name, parse_text_export, render_text,
    write_text_export, ExportedEntry,
};
