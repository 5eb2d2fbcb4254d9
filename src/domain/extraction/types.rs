// SPDX-License-Identifier: MPL-2.0
//! Extraction outcome types.

use crate::domain::metadata::GpsCoordinates;
use std::fmt;

// =============================================================================
// FailureReason
// =============================================================================

/// Why no coordinates could be reported for a file.
///
/// Every per-file failure ends up here as data; none of them aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The file decoded successfully but carries no GPS fields.
    NoLocationMetadata,

    /// The file's bytes could not be loaded or decoded as an image.
    UnreadableFile(String),

    /// The metadata extraction collaborator failed unexpectedly.
    ExtractionFailure(String),
}

impl FailureReason {
    /// Returns a stable identifier for the failure category.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            FailureReason::NoLocationMetadata => "no_location_metadata",
            FailureReason::UnreadableFile(_) => "unreadable_file",
            FailureReason::ExtractionFailure(_) => "extraction_failure",
        }
    }

    /// Returns the i18n message key for this failure.
    #[must_use]
    pub const fn i18n_key(&self) -> &'static str {
        match self {
            FailureReason::NoLocationMetadata => "failure-no-location-metadata",
            FailureReason::UnreadableFile(_) => "failure-unreadable-file",
            FailureReason::ExtractionFailure(_) => "failure-extraction",
        }
    }

    /// Returns the diagnostic detail carried by the failure, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            FailureReason::NoLocationMetadata => None,
            FailureReason::UnreadableFile(detail) | FailureReason::ExtractionFailure(detail) => {
                Some(detail.as_str())
            }
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoLocationMetadata => write!(
                f,
                "No GPS data found. Make sure Location Services were enabled when photo was taken."
            ),
            FailureReason::UnreadableFile(detail) => write!(f, "Failed to load image: {detail}"),
            FailureReason::ExtractionFailure(detail) => {
                write!(f, "Error reading file: {detail}")
            }
        }
    }
}

// =============================================================================
// ExtractionResult
// =============================================================================

/// Outcome of processing one file: coordinates or a failure, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Located(GpsCoordinates),
    Failed(FailureReason),
}

/// One entry per input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    name: String,
    outcome: ExtractionOutcome,
}

impl ExtractionResult {
    #[must_use]
    pub fn located(name: impl Into<String>, coordinates: GpsCoordinates) -> Self {
        Self {
            name: name.into(),
            outcome: ExtractionOutcome::Located(coordinates),
        }
    }

    #[must_use]
    pub fn failed(name: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            name: name.into(),
            outcome: ExtractionOutcome::Failed(reason),
        }
    }

    /// Original file name. Not guaranteed to be unique within a batch.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn outcome(&self) -> &ExtractionOutcome {
        &self.outcome
    }

    /// Coordinates, present if and only if there is no failure reason.
    #[must_use]
    pub fn coordinates(&self) -> Option<GpsCoordinates> {
        match &self.outcome {
            ExtractionOutcome::Located(coordinates) => Some(*coordinates),
            ExtractionOutcome::Failed(_) => None,
        }
    }

    /// Failure reason, present if and only if there are no coordinates.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match &self.outcome {
            ExtractionOutcome::Located(_) => None,
            ExtractionOutcome::Failed(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn is_located(&self) -> bool {
        matches!(self.outcome, ExtractionOutcome::Located(_))
    }
}

// =============================================================================
// ResultSet
// =============================================================================

/// Counts used for the "found GPS data in X of Y files" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub located: usize,
    pub total: usize,
}

impl Summary {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total - self.located
    }
}

/// Ordered results of one batch, one entry per input file, in input order.
///
/// A result set is never modified after it is built; a new batch produces a
/// new set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    results: Vec<ExtractionResult>,
}

impl ResultSet {
    /// Builds a result set whose order is the given order.
    #[must_use]
    pub fn from_ordered(results: Vec<ExtractionResult>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ExtractionResult> {
        self.results.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractionResult> {
        self.results.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ExtractionResult] {
        &self.results
    }

    /// Located entries with their input index.
    pub fn located(&self) -> impl Iterator<Item = (usize, &ExtractionResult, GpsCoordinates)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(index, result)| {
                result
                    .coordinates()
                    .map(|coordinates| (index, result, coordinates))
            })
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            located: self.results.iter().filter(|r| r.is_located()).count(),
            total: self.results.len(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ExtractionResult;
    type IntoIter = std::slice::Iter<'a, ExtractionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
