// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and synthetic image fixtures.
//!
//! This module re-exports the `approx` crate's assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.
//! JPEG fixtures are encoded in memory with `image` and carry EXIF blocks written
//! by `kamadak-exif`'s experimental writer.

// Re-export approx macro for convenient use in tests
pub use approx::assert_abs_diff_eq;

use std::io::Cursor;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

pub fn rational(num: u32, denom: u32) -> exif::Rational {
    exif::Rational { num, denom }
}

/// Builds the four GPS fields from `(numerator, denominator)` triples.
pub fn gps_fields(
    latitude: [(u32, u32); 3],
    latitude_ref: &str,
    longitude: [(u32, u32); 3],
    longitude_ref: &str,
) -> Vec<exif::Field> {
    let field = |tag, value| exif::Field {
        tag,
        ifd_num: exif::In::PRIMARY,
        value,
    };
    let dms = |parts: [(u32, u32); 3]| {
        exif::Value::Rational(parts.iter().map(|&(n, d)| rational(n, d)).collect())
    };

    vec![
        field(exif::Tag::GPSLatitude, dms(latitude)),
        field(
            exif::Tag::GPSLatitudeRef,
            exif::Value::Ascii(vec![latitude_ref.as_bytes().to_vec()]),
        ),
        field(exif::Tag::GPSLongitude, dms(longitude)),
        field(
            exif::Tag::GPSLongitudeRef,
            exif::Value::Ascii(vec![longitude_ref.as_bytes().to_vec()]),
        ),
    ]
}

/// A small valid JPEG without any EXIF block.
pub fn plain_jpeg() -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgb8(8, 8)
        .write_to(&mut Cursor::new(&mut buf), image_rs::ImageFormat::Jpeg)
        .expect("failed to encode JPEG");
    buf
}

/// A small valid image in `format` without any metadata.
pub fn plain_image(format: image_rs::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgba8(8, 8)
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("failed to encode image");
    buf
}

/// A valid JPEG whose APP1 segment carries the given raw TIFF payload.
///
/// `tests/common/mod.rs::splice_exif` builds the same layout for integration
/// tests; change both together.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let jpeg = plain_jpeg();
    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("EXIF payload too large");

    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// A valid JPEG carrying an EXIF block with the given fields.
pub fn jpeg_with_fields(fields: &[exif::Field]) -> Vec<u8> {
    let mut writer = exif::experimental::Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer
        .write(&mut tiff, false)
        .expect("failed to write EXIF block");
    jpeg_with_exif(&tiff.into_inner())
}
