// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`metadata`]: Location types ([`GpsCoordinates`](metadata::GpsCoordinates),
//!   [`LocationMetadata`](metadata::LocationMetadata), [`DmsAngle`](metadata::DmsAngle))
//! - [`extraction`]: Batch outcome types ([`ExtractionResult`](extraction::ExtractionResult),
//!   [`FailureReason`](extraction::FailureReason), [`ResultSet`](extraction::ResultSet))

pub mod extraction;
pub mod metadata;
