// SPDX-License-Identifier: MPL-2.0
//! In-memory image fixtures for integration tests.
#![allow(dead_code)]

use std::io::Cursor;

/// DMS triple as `(numerator, denominator)` rationals.
pub type Dms = [(u32, u32); 3];

fn ascii(text: &str) -> exif::Value {
    exif::Value::Ascii(vec![text.as_bytes().to_vec()])
}

fn rationals(parts: Dms) -> exif::Value {
    exif::Value::Rational(
        parts
            .iter()
            .map(|&(num, denom)| exif::Rational { num, denom })
            .collect(),
    )
}

fn field(tag: exif::Tag, value: exif::Value) -> exif::Field {
    exif::Field {
        tag,
        ifd_num: exif::In::PRIMARY,
        value,
    }
}

/// A small valid JPEG without EXIF.
pub fn plain_jpeg() -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgb8(16, 16)
        .write_to(&mut Cursor::new(&mut buf), image_rs::ImageFormat::Jpeg)
        .expect("failed to encode JPEG");
    buf
}

/// A small valid PNG without EXIF.
pub fn plain_png() -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgb8(16, 16)
        .write_to(&mut Cursor::new(&mut buf), image_rs::ImageFormat::Png)
        .expect("failed to encode PNG");
    buf
}

/// A small valid GIF. The format has no EXIF container.
pub fn plain_gif() -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgba8(16, 16)
        .write_to(&mut Cursor::new(&mut buf), image_rs::ImageFormat::Gif)
        .expect("failed to encode GIF");
    buf
}

/// A small valid BMP. The format has no EXIF container.
pub fn plain_bmp() -> Vec<u8> {
    let mut buf = Vec::new();
    image_rs::DynamicImage::new_rgba8(16, 16)
        .write_to(&mut Cursor::new(&mut buf), image_rs::ImageFormat::Bmp)
        .expect("failed to encode BMP");
    buf
}

/// A JPEG carrying GPS latitude/longitude in DMS form.
pub fn gps_jpeg(latitude: Dms, lat_ref: &str, longitude: Dms, lon_ref: &str) -> Vec<u8> {
    let fields = [
        field(exif::Tag::GPSLatitude, rationals(latitude)),
        field(exif::Tag::GPSLatitudeRef, ascii(lat_ref)),
        field(exif::Tag::GPSLongitude, rationals(longitude)),
        field(exif::Tag::GPSLongitudeRef, ascii(lon_ref)),
    ];

    let mut writer = exif::experimental::Writer::new();
    for f in &fields {
        writer.push_field(f);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer
        .write(&mut tiff, false)
        .expect("failed to write EXIF block");
    splice_exif(&plain_jpeg(), &tiff.into_inner())
}

/// 40°26'46" N, 79°56'55" W (Pittsburgh).
pub fn pittsburgh_jpeg() -> Vec<u8> {
    gps_jpeg(
        [(40, 1), (26, 1), (46, 1)],
        "N",
        [(79, 1), (56, 1), (55, 1)],
        "W",
    )
}

/// 33°52'7.68" S, 151°12'33.48" E (Sydney).
pub fn sydney_jpeg() -> Vec<u8> {
    gps_jpeg(
        [(33, 1), (52, 1), (768, 100)],
        "S",
        [(151, 1), (12, 1), (3348, 100)],
        "E",
    )
}

/// Bytes that no decoder accepts.
pub fn corrupt_bytes() -> Vec<u8> {
    b"this is not an image at all".to_vec()
}

// Same APP1 layout as `jpeg_with_exif` in src/test_utils.rs; change both together.
fn splice_exif(jpeg: &[u8], tiff: &[u8]) -> Vec<u8> {
    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("EXIF payload too large");
    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}
