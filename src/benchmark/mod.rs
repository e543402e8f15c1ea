//! Scaling benchmark for the two distance variants.
//!
//! The harness runs the candidate scan over every prefix of a probe
//! (`1..=len`), once per variant, and records the wall-clock time of each
//! full scan. The recursive variant stops at its length cutoff so that the
//! exponential blow-up stays bounded.
//!
//! The two phases never interleave, and within a phase prefix lengths only
//! increase. Between sub-runs the harness hands control to a
//! [`BenchmarkHost`], which may pause or cancel; that time is never part of
//! a measurement.
//!
//! # Example
//!
//! ```rust
//! use nearword::benchmark::{BenchmarkHarness, BenchmarkOptions, NoPauseHost};
//! use nearword::dictionary::WordList;
//!
//! let words = WordList::from_terms(["perpustakaan", "buku"]);
//! let harness = BenchmarkHarness::with_options(words, BenchmarkOptions::default());
//!
//! let report = harness.run_with_host("perpustakan", &mut NoPauseHost).unwrap();
//! assert_eq!(report.recursive.len(), 8);
//! assert_eq!(report.iterative.len(), 11);
//! ```

mod host;
mod series;

pub use host::{BenchmarkHost, CancelFlagHost, NoPauseHost, SleepHost};
pub use series::{BenchmarkReport, ChartSeries, TimingPoint, TimingSeries};

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::{debug, info_span};

use crate::dictionary::WordList;
use crate::distance::{DistanceVariant, RECURSIVE_LENGTH_CUTOFF};
use crate::error::{Error, Result};
use crate::search::{CandidateSearch, MatchOutcome, SearchOptions};

/// Default pause at each yield point.
pub const DEFAULT_YIELD_PAUSE: Duration = Duration::from_millis(10);

/// Which variant's phase runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseOrder {
    /// Recursive phase, then iterative.
    #[default]
    RecursiveFirst,
    /// Iterative phase, then recursive.
    IterativeFirst,
}

impl PhaseOrder {
    /// Variants in execution order.
    pub fn variants(self) -> [DistanceVariant; 2] {
        match self {
            PhaseOrder::RecursiveFirst => [DistanceVariant::Recursive, DistanceVariant::Iterative],
            PhaseOrder::IterativeFirst => [DistanceVariant::Iterative, DistanceVariant::Recursive],
        }
    }
}

impl fmt::Display for PhaseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseOrder::RecursiveFirst => f.write_str("recursive-first"),
            PhaseOrder::IterativeFirst => f.write_str("iterative-first"),
        }
    }
}

impl FromStr for PhaseOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive-first" | "recursive" => Ok(PhaseOrder::RecursiveFirst),
            "iterative-first" | "iterative" => Ok(PhaseOrder::IterativeFirst),
            _ => Err(format!(
                "Unknown phase order: {}. Valid options: recursive-first, iterative-first",
                s
            )),
        }
    }
}

/// Benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    /// Longest prefix timed with the recursive variant.
    pub recursive_cutoff: usize,
    /// Pause used by [`BenchmarkHarness::run`] at each yield point.
    pub yield_pause: Duration,
    /// Phase execution order.
    pub phase_order: PhaseOrder,
    /// Options for the scans being timed.
    pub search: SearchOptions,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            recursive_cutoff: RECURSIVE_LENGTH_CUTOFF,
            yield_pause: DEFAULT_YIELD_PAUSE,
            phase_order: PhaseOrder::default(),
            search: SearchOptions::default(),
        }
    }
}

impl BenchmarkOptions {
    /// Longest prefix timed for `variant`, or `None` if unbounded.
    pub fn cutoff(&self, variant: DistanceVariant) -> Option<usize> {
        match variant {
            DistanceVariant::Recursive => Some(self.recursive_cutoff),
            DistanceVariant::Iterative => None,
        }
    }
}

/// Best match for a probe, with both variants' scan times.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SuggestionReport {
    /// Best match found by the iterative scan.
    pub outcome: MatchOutcome,
    /// Iterative scan time in milliseconds.
    pub iterative_ms: f64,
    /// Recursive scan time in milliseconds, or `None` when the probe is
    /// longer than the recursive cutoff and the scan was skipped.
    pub recursive_ms: Option<f64>,
}

/// Times candidate scans across growing probe prefixes.
#[derive(Debug, Clone)]
pub struct BenchmarkHarness {
    words: WordList,
    options: BenchmarkOptions,
}

impl BenchmarkHarness {
    /// Harness over `words` with default options.
    pub fn new(words: WordList) -> Self {
        Self::with_options(words, BenchmarkOptions::default())
    }

    /// Harness over `words` with explicit options.
    pub fn with_options(words: WordList, options: BenchmarkOptions) -> Self {
        Self { words, options }
    }

    /// The word list being benchmarked.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Active options.
    pub fn options(&self) -> &BenchmarkOptions {
        &self.options
    }

    /// Run both phases, sleeping for the configured pause between sub-runs.
    pub fn run(&self, probe: &str) -> Result<BenchmarkReport> {
        self.run_with_host(probe, &mut SleepHost::new(self.options.yield_pause))
    }

    /// Run both phases, yielding to `host` before every sub-run.
    ///
    /// An empty probe yields two empty series.
    pub fn run_with_host<H>(&self, probe: &str, host: &mut H) -> Result<BenchmarkReport>
    where
        H: BenchmarkHost + ?Sized,
    {
        // Byte offset just past each character: `probe[..ends[k]]` is the
        // prefix of length k + 1.
        let ends: Vec<usize> = probe
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .collect();

        let mut recursive = TimingSeries::new(DistanceVariant::Recursive);
        let mut iterative = TimingSeries::new(DistanceVariant::Iterative);

        for variant in self.options.phase_order.variants() {
            let series = match variant {
                DistanceVariant::Recursive => &mut recursive,
                DistanceVariant::Iterative => &mut iterative,
            };
            self.run_phase(variant, probe, &ends, host, series)?;
        }

        Ok(BenchmarkReport {
            probe_len: ends.len(),
            recursive,
            iterative,
        })
    }

    fn run_phase<H>(
        &self,
        variant: DistanceVariant,
        probe: &str,
        ends: &[usize],
        host: &mut H,
        series: &mut TimingSeries,
    ) -> Result<()>
    where
        H: BenchmarkHost + ?Sized,
    {
        let _span = info_span!("benchmark_phase", %variant, probe_len = ends.len()).entered();

        let search = CandidateSearch::with_options(self.words.clone(), variant, self.options.search);
        let cutoff = self.options.cutoff(variant);

        for (index, &end) in ends.iter().enumerate() {
            let prefix_len = index + 1;
            if cutoff.is_some_and(|limit| prefix_len > limit) {
                debug!(prefix_len, "beyond cutoff, remaining lengths skipped");
                break;
            }

            if host.before_run(variant, prefix_len).is_break() {
                return Err(Error::Cancelled {
                    variant,
                    prefix_len,
                });
            }

            let prefix = &probe[..end];
            let start = Instant::now();
            let min_distance = search.min_distance(prefix);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            debug!(prefix_len, elapsed_ms, ?min_distance, "timed scan");
            series.points.push(TimingPoint {
                prefix_len,
                elapsed_ms,
            });
        }

        Ok(())
    }

    /// Look up the best match for `probe` and time the scan with both
    /// variants.
    ///
    /// The iterative scan always runs and supplies the outcome. The
    /// recursive scan only runs when `probe` is within the recursive cutoff.
    pub fn suggest(&self, probe: &str) -> SuggestionReport {
        let iterative = CandidateSearch::with_options(
            self.words.clone(),
            DistanceVariant::Iterative,
            self.options.search,
        );
        let start = Instant::now();
        let outcome = iterative.best_match(probe);
        let iterative_ms = start.elapsed().as_secs_f64() * 1000.0;

        let recursive_ms = (probe.chars().count() <= self.options.recursive_cutoff).then(|| {
            let recursive = CandidateSearch::with_options(
                self.words.clone(),
                DistanceVariant::Recursive,
                self.options.search,
            );
            let start = Instant::now();
            let min_distance = recursive.min_distance(probe);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            debug!(?min_distance, elapsed_ms, "recursive suggestion scan");
            elapsed_ms
        });

        SuggestionReport {
            outcome,
            iterative_ms,
            recursive_ms,
        }
    }
}
