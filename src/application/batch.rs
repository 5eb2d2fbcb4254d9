// SPDX-License-Identifier: MPL-2.0
//! Batch processing of input files into an ordered [`ResultSet`].
//!
//! # Ordering
//!
//! Results are stored by input index. The concurrent path runs files on
//! `tokio`'s blocking pool and awaits the handles in input order, so the
//! completion order of individual files is never observable.
//!
//! # Usage
//!
//! ```ignore
//! let processor = BatchProcessor::new(ExifLocationReader::new()).with_jobs(4);
//! let results = processor.process_concurrent(sources).await;
//! println!("{} of {}", results.summary().located, results.len());
//! ```

use crate::application::normalizer::{self, extract};
use crate::application::port::{ImageSource, LocationReader};
use crate::config::defaults::{default_jobs, MAX_JOBS, MIN_JOBS};
use crate::domain::extraction::{ExtractionResult, FailureReason, ResultSet};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// Runs the per-file pipeline over a list of sources.
#[derive(Debug)]
pub struct BatchProcessor<R> {
    reader: Arc<R>,
    jobs: usize,
}

impl<R> Clone for BatchProcessor<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            jobs: self.jobs,
        }
    }
}

impl<R: LocationReader + 'static> BatchProcessor<R> {
    /// Creates a processor sized to the machine's available parallelism.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(reader),
            jobs: default_jobs(),
        }
    }

    /// Sets the maximum number of files processed at the same time.
    ///
    /// Values are clamped to `MIN_JOBS..=MAX_JOBS`.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.clamp(MIN_JOBS, MAX_JOBS);
        self
    }

    /// Returns the concurrency bound.
    #[must_use]
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Processes files one at a time, in input order.
    pub fn process<S: ImageSource>(&self, sources: &[S]) -> ResultSet {
        if sources.is_empty() {
            return ResultSet::default();
        }

        let started = Instant::now();
        let total = sources.len();
        let results: Vec<ExtractionResult> = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                tracing::debug!(
                    "Processing {}/{}: {}...",
                    index + 1,
                    total,
                    source.name()
                );
                extract(source, self.reader.as_ref())
            })
            .collect();

        finish(results, started)
    }

    /// Processes files concurrently, at most [`jobs`](Self::jobs) at a time.
    ///
    /// Must be called from within a `tokio` runtime. A file whose task cannot
    /// be joined is reported as an extraction failure in its own slot.
    pub async fn process_concurrent<S>(&self, sources: Vec<S>) -> ResultSet
    where
        S: ImageSource + 'static,
    {
        if sources.is_empty() {
            return ResultSet::default();
        }

        let started = Instant::now();
        let total = sources.len();
        let semaphore = Arc::new(Semaphore::new(self.jobs));
        let mut handles = Vec::with_capacity(total);

        for (index, source) in sources.into_iter().enumerate() {
            let name = source.name().to_string();
            let reader = Arc::clone(&self.reader);
            let semaphore = Arc::clone(&semaphore);

            let handle = tokio::spawn(async move {
                // The semaphore is never closed; a missing permit only lifts the bound.
                let _permit = semaphore.acquire_owned().await.ok();
                tracing::debug!("Processing {}/{}: {}...", index + 1, total, source.name());
                tokio::task::spawn_blocking(move || extract(&source, reader.as_ref())).await
            });
            handles.push((name, handle));
        }

        let mut results = Vec::with_capacity(total);
        for (name, handle) in handles {
            let result = match handle.await {
                Ok(Ok(result)) => result,
                Ok(Err(err)) | Err(err) => {
                    let msg = if err.is_panic() {
                        normalizer::panic_message(err.into_panic().as_ref())
                    } else {
                        err.to_string()
                    };
                    tracing::warn!(file = %name, error = %msg, "extraction task failed");
                    ExtractionResult::failed(name, FailureReason::ExtractionFailure(msg))
                }
            };
            results.push(result);
        }

        finish(results, started)
    }
}

fn finish(results: Vec<ExtractionResult>, started: Instant) -> ResultSet {
    let set = ResultSet::from_ordered(results);
    let summary = set.summary();
    tracing::info!(
        located = summary.located,
        total = summary.total,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "batch complete"
    );
    set
}
