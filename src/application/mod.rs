// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`normalizer`]: Turns reader output into per-file results
//! - [`batch`]: Ordered batch processing, sequential or bounded-concurrent
//! - [`query`]: Query services (CQRS read-side)
//! - [`export`]: Text and JSON reports
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use geo_lens::application::batch::BatchProcessor;
//! use geo_lens::infrastructure::{ExifLocationReader, FileSource};
//!
//! let processor = BatchProcessor::new(ExifLocationReader::new());
//! let results = processor.process(&[FileSource::new("beach.jpg")]);
//! println!("{} of {}", results.summary().located, results.summary().total);
//! ```

pub mod batch;
pub mod export;
pub mod normalizer;
pub mod port;
pub mod query;
