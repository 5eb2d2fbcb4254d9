// SPDX-License-Identifier: MPL-2.0
//! Extraction result domain types.
//!
//! - [`ExtractionResult`]: one row per input file
//! - [`FailureReason`]: why a file produced no coordinates
//! - [`ResultSet`]: ordered rows of one batch, with [`Summary`] counts

mod types;

pub use types::{ExtractionOutcome, ExtractionResult, FailureReason, ResultSet, Summary};
