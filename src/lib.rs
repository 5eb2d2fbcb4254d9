// SPDX-License-Identifier: MPL-2.0
//! `geo_lens` extracts GPS coordinates from image metadata.
//!
//! A batch of files goes through an EXIF reader, each file's location is
//! normalized to signed decimal degrees rounded to six places, and the ordered
//! results feed a localized console report, a map view, Google Maps links and
//! a parseable text export.

#![doc(html_root_url = "https://docs.rs/geo_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_utils;
