// SPDX-License-Identifier: MPL-2.0
//! Image source port.
//!
//! A source is one user-selected file: a display name plus readable bytes.
//! Adapters live in `infrastructure::source` (filesystem and in-memory).

use std::io;

/// Port for one input file handed to the batch processor.
pub trait ImageSource: Send + Sync {
    /// Name shown to the user. Not required to be unique.
    fn name(&self) -> &str;

    /// Reads the full file content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the content cannot be loaded.
    fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

impl<T: ImageSource + ?Sized> ImageSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        (**self).read_bytes()
    }
}
