// SPDX-License-Identifier: MPL-2.0
//! EXIF location reader built on `kamadak-exif` and `image`.
//!
//! # Decision order
//!
//! 1. Read the EXIF container. If it parses, look up the four GPS tags; any
//!    missing tag means [`LocationMetadata::Absent`]. The image payload is not
//!    decoded in this case, so containers the `image` crate cannot decode
//!    (HEIF, for example) still report their location.
//! 2. If the container does not parse, read the image header with `image`:
//!    - not an image => [`MetadataError::Unreadable`]
//!    - image without an EXIF block => [`LocationMetadata::Absent`]
//!    - format `kamadak-exif` has no EXIF support for (GIF, BMP, ICO) =>
//!      [`LocationMetadata::Absent`]
//!    - EXIF-capable format with a corrupt EXIF block =>
//!      [`MetadataError::ExtractionFailed`]

use crate::application::port::{LocationReader, MetadataError};
use crate::domain::metadata::{DmsAngle, Hemisphere, LocationMetadata};
use std::io::Cursor;

/// Reads GPS coordinates from the primary IFD of an image's EXIF block.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifLocationReader;

impl ExifLocationReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LocationReader for ExifLocationReader {
    fn read_location(&self, bytes: &[u8]) -> Result<LocationMetadata, MetadataError> {
        let exif_reader = exif::Reader::new();
        match exif_reader.read_from_container(&mut Cursor::new(bytes)) {
            Ok(exif) => extract_gps(&exif),
            Err(err) => {
                let format = image_format(bytes)?;
                match err {
                    exif::Error::NotFound(_) => Ok(LocationMetadata::Absent),
                    _ if !carries_exif(format) => {
                        tracing::debug!(?format, "no EXIF support for format");
                        Ok(LocationMetadata::Absent)
                    }
                    other => Err(MetadataError::ExtractionFailed(other.to_string())),
                }
            }
        }
    }
}

/// Formats whose containers `kamadak-exif` can parse.
fn carries_exif(format: image_rs::ImageFormat) -> bool {
    use image_rs::ImageFormat;
    matches!(
        format,
        ImageFormat::Jpeg
            | ImageFormat::Tiff
            | ImageFormat::Png
            | ImageFormat::WebP
            | ImageFormat::Avif
    )
}

/// Reads the image header and returns its format, or `Unreadable` if the
/// bytes are not a decodable image.
fn image_format(bytes: &[u8]) -> Result<image_rs::ImageFormat, MetadataError> {
    let reader = image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MetadataError::Unreadable(e.to_string()))?;

    let Some(format) = reader.format() else {
        return Err(MetadataError::Unreadable(
            "Unrecognized image format".to_string(),
        ));
    };

    reader
        .into_dimensions()
        .map(|_| format)
        .map_err(|e| MetadataError::Unreadable(e.to_string()))
}

/// Extracts GPS coordinates from EXIF data.
fn extract_gps(exif: &exif::Exif) -> Result<LocationMetadata, MetadataError> {
    let fields = (
        exif.get_field(exif::Tag::GPSLatitude, exif::In::PRIMARY),
        exif.get_field(exif::Tag::GPSLatitudeRef, exif::In::PRIMARY),
        exif.get_field(exif::Tag::GPSLongitude, exif::In::PRIMARY),
        exif.get_field(exif::Tag::GPSLongitudeRef, exif::In::PRIMARY),
    );

    let (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) = fields else {
        return Ok(LocationMetadata::Absent);
    };

    let latitude = parse_dms(&lat.value, hemisphere(&lat_ref.value, "GPSLatitudeRef")?)
        .ok_or_else(|| malformed("GPSLatitude", &lat.value))?;
    let longitude = parse_dms(&lon.value, hemisphere(&lon_ref.value, "GPSLongitudeRef")?)
        .ok_or_else(|| malformed("GPSLongitude", &lon.value))?;

    Ok(LocationMetadata::Dms {
        latitude,
        longitude,
    })
}

/// Parses a GPS coordinate from EXIF rational values (degrees, minutes, seconds).
///
/// Writers that store fewer than three components leave the rest at zero;
/// more than three is malformed.
fn parse_dms(value: &exif::Value, hemisphere: Hemisphere) -> Option<DmsAngle> {
    let components: Vec<f64> = match value {
        exif::Value::Rational(rationals) => rationals.iter().map(exif::Rational::to_f64).collect(),
        exif::Value::SRational(rationals) => {
            rationals.iter().map(exif::SRational::to_f64).collect()
        }
        _ => return None,
    };

    if components.len() > 3 {
        return None;
    }
    let (&degrees, rest) = components.split_first()?;
    let minutes = rest.first().copied().unwrap_or(0.0);
    let seconds = rest.get(1).copied().unwrap_or(0.0);
    Some(DmsAngle::new(degrees, minutes, seconds, hemisphere))
}

/// Parses a hemisphere reference tag (`"N"`, `"S"`, `"E"`, `"W"`).
fn hemisphere(value: &exif::Value, tag: &str) -> Result<Hemisphere, MetadataError> {
    let reference = match value {
        exif::Value::Ascii(strings) => strings
            .first()
            .and_then(|s| s.iter().find(|b| !b.is_ascii_whitespace()))
            .map(|b| char::from(*b)),
        _ => None,
    };

    reference
        .and_then(Hemisphere::from_reference)
        .ok_or_else(|| malformed(tag, value))
}

fn malformed(tag: &str, value: &exif::Value) -> MetadataError {
    MetadataError::ExtractionFailed(format!("Malformed {tag} value: {value:?}"))
}
