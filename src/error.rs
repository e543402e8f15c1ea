//! Error types for benchmark runs.
//!
//! Distance computation and candidate search are total and never fail; the
//! only error the library reports is a benchmark stopped by its host.

use thiserror::Error;

use crate::distance::DistanceVariant;

/// Errors that can occur while running a benchmark.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host asked the harness to stop at a yield point.
    ///
    /// `prefix_len` is the sub-run that was about to start; every earlier
    /// sub-run completed and nothing after it was attempted.
    #[error("Benchmark cancelled before {variant} run at prefix length {prefix_len}")]
    Cancelled {
        /// Variant whose phase was interrupted.
        variant: DistanceVariant,
        /// Prefix length of the sub-run that did not start.
        prefix_len: usize,
    },
}

/// A specialized `Result` type for benchmark operations.
pub type Result<T> = std::result::Result<T, Error>;
