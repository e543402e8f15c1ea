//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::benchmark::PhaseOrder;
use crate::distance::DistanceVariant;

/// Top-level command line
#[derive(Parser)]
#[command(name = "nearword")]
#[command(about = "Nearest-word lookup and edit-distance scaling benchmarks")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log search and benchmark progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Suggest the closest word and time both distance variants
    Suggest {
        /// Word to look up (trimmed and lower-cased)
        probe: String,

        /// Word list file (one word per line)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Skip words whose length differs from the probe by more than this
        #[arg(short = 'm', long)]
        max_length_difference: Option<usize>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Compute the edit distance between two strings
    Distance {
        /// First string
        source: String,

        /// Second string
        target: String,

        /// Distance implementation
        #[arg(short = 'a', long, default_value = "iterative")]
        variant: DistanceVariant,
    },

    /// Time the candidate scan over every prefix of a probe
    Bench {
        /// Probe whose prefixes are benchmarked (trimmed and lower-cased)
        probe: String,

        /// Word list file (one word per line)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Which variant runs first
        #[arg(short, long)]
        order: Option<PhaseOrder>,

        /// Pause between timed runs, in milliseconds
        #[arg(short, long)]
        pause_ms: Option<u64>,

        /// Longest prefix timed with the recursive variant
        #[arg(short, long)]
        recursive_cutoff: Option<usize>,

        /// Skip words whose length differs from the probe by more than this
        #[arg(short = 'm', long)]
        max_length_difference: Option<usize>,

        /// Emit the chart series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch an interactive suggestion loop
    Repl {
        /// Word list file (one word per line)
        #[arg(short, long)]
        words: Option<PathBuf>,
    },

    /// Show or update user settings
    Settings {
        /// Set default word list path
        #[arg(long)]
        set_words: Option<PathBuf>,

        /// Set default pruning bound
        #[arg(long)]
        set_max_length_difference: Option<usize>,

        /// Set default recursive cutoff
        #[arg(long)]
        set_recursive_cutoff: Option<usize>,

        /// Set default pause between benchmark runs (ms)
        #[arg(long)]
        set_pause_ms: Option<u64>,

        /// Set default phase order
        #[arg(long)]
        set_order: Option<PhaseOrder>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
