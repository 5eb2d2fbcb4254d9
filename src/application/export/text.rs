// SPDX-License-Identifier: MPL-2.0
//! Plain-text export of a [`ResultSet`].
//!
//! The format is deterministic and stays in English so it can be read back:
//!
//! ```text
//! GPS Coordinates Extraction Results
//! =====================================
//!
//! Image 1: beach.jpg
//! Latitude: 40.446111
//! Longitude: -79.948611
//! Google Maps: https://www.google.com/maps?q=40.446111,-79.948611
//!
//! Image 2: scan.png
//! Status: No GPS data found. Make sure Location Services were enabled when photo was taken.
//!
//! ```
//!
//! Numbers use Rust's shortest round-trip float formatting, so parsing the
//! `Latitude`/`Longitude` lines gives back the exact stored values.

use crate::config::defaults::{EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};
use crate::domain::extraction::{ExtractionOutcome, ResultSet};
use crate::error::{Error, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const TITLE: &str = "GPS Coordinates Extraction Results";
const RULE: &str = "=====================================";
const IMAGE_PREFIX: &str = "Image ";
const LATITUDE_PREFIX: &str = "Latitude: ";
const LONGITUDE_PREFIX: &str = "Longitude: ";
const MAP_PREFIX: &str = "Google Maps: ";
const STATUS_PREFIX: &str = "Status: ";

/// Renders the text export.
#[must_use]
pub fn render_text(results: &ResultSet) -> String {
    let mut content = String::new();
    content.push_str(TITLE);
    content.push('\n');
    content.push_str(RULE);
    content.push_str("\n\n");

    for (index, result) in results.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            content,
            "{IMAGE_PREFIX}{}: {}",
            index + 1,
            single_line(result.name())
        );
        match result.outcome() {
            ExtractionOutcome::Located(coordinates) => {
                let _ = writeln!(content, "{LATITUDE_PREFIX}{}", coordinates.latitude());
                let _ = writeln!(content, "{LONGITUDE_PREFIX}{}", coordinates.longitude());
                let _ = writeln!(content, "{MAP_PREFIX}{}", coordinates.map_url());
            }
            ExtractionOutcome::Failed(reason) => {
                let _ = writeln!(content, "{STATUS_PREFIX}{}", single_line(&reason.to_string()));
            }
        }
        content.push('\n');
    }

    content
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// One entry read back from a text export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedEntry {
    /// 1-based position, as printed.
    pub number: usize,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_url: Option<String>,
    pub status: Option<String>,
}

impl ExportedEntry {
    fn new(number: usize, name: String) -> Self {
        Self {
            number,
            name,
            latitude: None,
            longitude: None,
            map_url: None,
            status: None,
        }
    }
}

/// Parses a text export back into its entries.
///
/// # Errors
///
/// Returns [`Error::Export`] on lines that do not belong to the format or
/// on unparseable numbers.
pub fn parse_text_export(content: &str) -> Result<Vec<ExportedEntry>> {
    let mut entries: Vec<ExportedEntry> = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line_no = line_no + 1;
        if line.is_empty() || line == TITLE || line == RULE {
            continue;
        }

        if let Some(rest) = line.strip_prefix(IMAGE_PREFIX) {
            let (number, name) = rest
                .split_once(": ")
                .ok_or_else(|| parse_error(line_no, "missing image name"))?;
            let number = number
                .parse::<usize>()
                .map_err(|_| parse_error(line_no, "invalid image number"))?;
            entries.push(ExportedEntry::new(number, name.to_string()));
            continue;
        }

        let entry = entries
            .last_mut()
            .ok_or_else(|| parse_error(line_no, "field before first image"))?;

        if let Some(value) = line.strip_prefix(LATITUDE_PREFIX) {
            entry.latitude = Some(parse_number(value, line_no)?);
        } else if let Some(value) = line.strip_prefix(LONGITUDE_PREFIX) {
            entry.longitude = Some(parse_number(value, line_no)?);
        } else if let Some(value) = line.strip_prefix(MAP_PREFIX) {
            entry.map_url = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix(STATUS_PREFIX) {
            entry.status = Some(value.to_string());
        } else {
            return Err(parse_error(line_no, "unknown line"));
        }
    }

    Ok(entries)
}

fn parse_number(value: &str, line_no: usize) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| parse_error(line_no, "invalid number"))
}

fn parse_error(line_no: usize, msg: &str) -> Error {
    Error::Export(format!("line {line_no}: {msg}"))
}

/// File name for an export created at `timestamp_millis` (Unix epoch).
#[must_use]
pub fn export_file_name(timestamp_millis: i64) -> String {
    format!("{EXPORT_FILE_PREFIX}{timestamp_millis}.{EXPORT_FILE_EXTENSION}")
}

/// File name for an export created now.
#[must_use]
pub fn default_export_file_name() -> String {
    export_file_name(chrono::Utc::now().timestamp_millis())
}

/// Writes the export to `target`.
///
/// When `target` is an existing directory, a generated file name is used
/// inside it. Returns the path actually written.
pub fn write_text_export(results: &ResultSet, target: &Path) -> Result<PathBuf> {
    let path = if target.is_dir() {
        target.join(default_export_file_name())
    } else {
        target.to_path_buf()
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render_text(results))
        .map_err(|e| Error::Export(format!("{}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), entries = results.len(), "text export written");
    Ok(path)
}
