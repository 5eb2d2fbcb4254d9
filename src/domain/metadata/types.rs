// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for image location metadata with no external dependencies.

use std::fmt;

/// Number of decimal places kept for every coordinate axis.
pub const COORDINATE_DECIMALS: usize = 6;

/// Rounds a decimal-degree value to [`COORDINATE_DECIMALS`] places.
///
/// The value goes through its fixed-point text form and back, so the result
/// is exactly the number a reader would get by parsing the printed value.
/// Ties on the exact binary value resolve half to even.
#[must_use]
pub fn round_coordinate(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{value:.prec$}", prec = COORDINATE_DECIMALS)
        .parse::<f64>()
        .unwrap_or(value);
    // "-0.000000" parses to -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees, rounded to six decimal places.
///
/// This type represents geographic coordinates using the WGS84 coordinate
/// system (latitude and longitude in decimal degrees). Values are never
/// clamped: what the image recorded is what is reported.
///
/// # Example
///
/// ```
/// use geo_lens::domain::metadata::GpsCoordinates;
///
/// let coords = GpsCoordinates::rounded(48.85661234, 2.3522).unwrap();
/// assert_eq!(coords.latitude(), 48.856612);
/// assert_eq!(coords.format(), "48.856612° N, 2.352200° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates coordinates from raw decimal degrees, rounding both axes.
    ///
    /// Returns `None` when either axis is NaN or infinite.
    #[must_use]
    pub fn rounded(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self {
            latitude: round_coordinate(latitude),
            longitude: round_coordinate(longitude),
        })
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether this is the null island (0,0) which often indicates
    /// a camera that wrote placeholder GPS data.
    #[must_use]
    pub fn is_null_island(&self) -> bool {
        self.latitude.abs() < f64::EPSILON && self.longitude.abs() < f64::EPSILON
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "48.856600° N, 2.352200° E"
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }

    /// Generates a Google Maps URL for these coordinates.
    ///
    /// The `?q=<lat>,<lon>` shape is kept stable so exported links stay valid.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

// =============================================================================
// Hemisphere
// =============================================================================

/// Hemisphere reference attached to a degrees/minutes/seconds angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses an EXIF-style reference character (`N`, `S`, `E`, `W`).
    ///
    /// Lowercase letters are accepted.
    #[must_use]
    pub fn from_reference(reference: char) -> Option<Self> {
        match reference.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Returns the reference character for this hemisphere.
    #[must_use]
    pub const fn reference(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// Returns `-1.0` for the southern and western hemispheres, `1.0` otherwise.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference())
    }
}

// =============================================================================
// DmsAngle
// =============================================================================

/// One coordinate axis as degrees, minutes and seconds plus a hemisphere.
///
/// Components may be fractional; zero minutes or seconds are ordinary values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsAngle {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl DmsAngle {
    #[must_use]
    pub fn new(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Converts to signed decimal degrees (unrounded).
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        self.hemisphere.sign() * magnitude
    }
}

// =============================================================================
// LocationMetadata
// =============================================================================

/// Location metadata as reported by an extraction collaborator.
///
/// The shape is decided once, where raw metadata is read, and is matched
/// exhaustively downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationMetadata {
    /// Both axes already expressed as signed decimal degrees.
    DecimalDegrees { latitude: f64, longitude: f64 },

    /// Both axes expressed as degrees/minutes/seconds with a hemisphere.
    Dms {
        latitude: DmsAngle,
        longitude: DmsAngle,
    },

    /// The image carries no usable location (missing axis or no GPS block).
    Absent,
}

impl LocationMetadata {
    /// Returns `true` if no location was found.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, LocationMetadata::Absent)
    }
}

// =============================================================================
// Tests
// =============================================================================
