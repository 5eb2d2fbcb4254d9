// SPDX-License-Identifier: MPL-2.0
//! Coordinate normalization.
//!
//! [`normalize`] turns the location metadata of one file into canonical
//! coordinates. [`extract`] wraps the whole per-file step (read bytes, read
//! metadata, normalize) and converts every failure into a [`FailureReason`],
//! so it returns a result for any input.

use crate::application::port::{ImageSource, LocationReader, MetadataError};
use crate::domain::extraction::{ExtractionResult, FailureReason};
use crate::domain::metadata::{GpsCoordinates, LocationMetadata};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Converts location metadata into coordinates rounded to six decimals.
///
/// # Errors
///
/// - [`FailureReason::NoLocationMetadata`] for [`LocationMetadata::Absent`]
/// - [`FailureReason::ExtractionFailure`] when an axis is not a finite number
pub fn normalize(location: &LocationMetadata) -> Result<GpsCoordinates, FailureReason> {
    let (latitude, longitude) = match location {
        LocationMetadata::DecimalDegrees {
            latitude,
            longitude,
        } => (*latitude, *longitude),
        LocationMetadata::Dms {
            latitude,
            longitude,
        } => (latitude.to_decimal(), longitude.to_decimal()),
        LocationMetadata::Absent => return Err(FailureReason::NoLocationMetadata),
    };

    GpsCoordinates::rounded(latitude, longitude).ok_or_else(|| {
        FailureReason::ExtractionFailure(format!(
            "coordinates are not finite numbers ({latitude}, {longitude})"
        ))
    })
}

/// Processes one file end to end.
///
/// The byte buffer lives only for the duration of this call. A panic inside
/// the reader is caught here and reported as an extraction failure for this
/// file alone. The process panic hook still runs first; the binary routes it
/// through `tracing`.
pub fn extract<S, R>(source: &S, reader: &R) -> ExtractionResult
where
    S: ImageSource + ?Sized,
    R: LocationReader + ?Sized,
{
    let name = source.name();

    let bytes = match source.read_bytes() {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(file = name, error = %err, "failed to read file");
            return ExtractionResult::failed(
                name,
                FailureReason::UnreadableFile(err.to_string()),
            );
        }
    };

    let read = panic::catch_unwind(AssertUnwindSafe(|| reader.read_location(&bytes)));
    drop(bytes);

    let location = match read {
        Ok(Ok(location)) => location,
        Ok(Err(MetadataError::Unreadable(msg))) => {
            tracing::debug!(file = name, error = %msg, "image could not be decoded");
            return ExtractionResult::failed(name, FailureReason::UnreadableFile(msg));
        }
        Ok(Err(MetadataError::ExtractionFailed(msg))) => {
            tracing::debug!(file = name, error = %msg, "metadata extraction failed");
            return ExtractionResult::failed(name, FailureReason::ExtractionFailure(msg));
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            tracing::warn!(file = name, error = %msg, "metadata reader panicked");
            return ExtractionResult::failed(name, FailureReason::ExtractionFailure(msg));
        }
    };

    match normalize(&location) {
        Ok(coordinates) => {
            tracing::debug!(
                file = name,
                latitude = coordinates.latitude(),
                longitude = coordinates.longitude(),
                "found coordinates"
            );
            ExtractionResult::located(name, coordinates)
        }
        Err(reason) => {
            tracing::debug!(file = name, reason = reason.category(), "no coordinates");
            ExtractionResult::failed(name, reason)
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "Unknown error".to_string()
    }
}
