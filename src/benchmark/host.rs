//! Yield points between timed benchmark runs.
//!
//! The harness calls [`BenchmarkHost::before_run`] before every sub-run,
//! outside the timed region. Hosts use it to pause, report progress, or stop
//! the benchmark; the scans themselves are never interrupted.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::distance::DistanceVariant;

/// Receives control between timed sub-runs.
pub trait BenchmarkHost {
    /// Called before the `variant` scan at `prefix_len` starts.
    ///
    /// Returning `ControlFlow::Break(())` cancels the benchmark.
    fn before_run(&mut self, variant: DistanceVariant, prefix_len: usize) -> ControlFlow<()>;
}

impl<F> BenchmarkHost for F
where
    F: FnMut(DistanceVariant, usize) -> ControlFlow<()>,
{
    fn before_run(&mut self, variant: DistanceVariant, prefix_len: usize) -> ControlFlow<()> {
        self(variant, prefix_len)
    }
}

/// Sleeps for a fixed pause before each run.
#[derive(Debug, Clone, Copy)]
pub struct SleepHost {
    pause: Duration,
}

impl SleepHost {
    /// Host that sleeps for `pause` at each yield point.
    pub fn new(pause: Duration) -> Self {
        Self { pause }
    }
}

impl BenchmarkHost for SleepHost {
    fn before_run(&mut self, _variant: DistanceVariant, _prefix_len: usize) -> ControlFlow<()> {
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        ControlFlow::Continue(())
    }
}

/// Never pauses and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPauseHost;

impl BenchmarkHost for NoPauseHost {
    fn before_run(&mut self, _variant: DistanceVariant, _prefix_len: usize) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Pauses like [`SleepHost`] and stops once a shared flag is raised.
#[derive(Debug)]
pub struct CancelFlagHost<'a> {
    flag: &'a AtomicBool,
    sleep: SleepHost,
}

impl<'a> CancelFlagHost<'a> {
    /// Host that checks `flag` after pausing for `pause`.
    pub fn new(flag: &'a AtomicBool, pause: Duration) -> Self {
        Self {
            flag,
            sleep: SleepHost::new(pause),
        }
    }
}

impl BenchmarkHost for CancelFlagHost<'_> {
    fn before_run(&mut self, variant: DistanceVariant, prefix_len: usize) -> ControlFlow<()> {
        self.sleep.before_run(variant, prefix_len)?;
        if self.flag.load(Ordering::Relaxed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
