//! # nearword
//!
//! Nearest-word lookup by Levenshtein distance, and a benchmark that shows how
//! a naive recursive distance scales against the dynamic-programming one.
//!
//! The crate has three parts:
//!
//! - [`distance`]: iterative (`O(n·m)`) and recursive (`O(3^n)`) edit distance
//! - [`search`]: a linear scan over a [`WordList`](dictionary::WordList) with a
//!   length-difference pruning filter and exact-match early exit
//! - [`benchmark`]: times the scan over every prefix of a probe, once per
//!   variant, producing two timing series
//!
//! ## Example
//!
//! ```rust
//! use nearword::prelude::*;
//!
//! let words = WordList::from_terms(["kucing", "kuda", "kambing"]);
//! let search = CandidateSearch::new(words.clone(), DistanceVariant::Iterative);
//! assert_eq!(search.best_match("kucang").word(), "kucing");
//!
//! let harness = BenchmarkHarness::new(words);
//! let report = harness.run_with_host("kucang", &mut NoPauseHost).unwrap();
//! assert_eq!(report.iterative.len(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod benchmark;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod search;
pub mod sink;

/// Interactive suggestion loop
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::benchmark::{
        BenchmarkHarness, BenchmarkHost, BenchmarkOptions, BenchmarkReport, CancelFlagHost,
        ChartSeries, NoPauseHost, PhaseOrder, SleepHost, SuggestionReport, TimingPoint,
        TimingSeries,
    };
    pub use crate::dictionary::WordList;
    pub use crate::distance::{
        iterative_distance, recursive_distance, DistanceMetric, DistanceVariant,
        RECURSIVE_LENGTH_CUTOFF,
    };
    pub use crate::search::{CandidateSearch, MatchOutcome, SearchOptions};
    pub use crate::sink::{JsonSink, MemorySink, ResultSink};
}
