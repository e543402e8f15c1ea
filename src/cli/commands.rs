//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::benchmark::{BenchmarkHarness, BenchmarkReport, SuggestionReport};
use crate::dictionary::WordList;
use crate::distance::{DistanceMetric, DistanceVariant};
use crate::search::MatchOutcome;
use crate::sink::{JsonSink, ResultSink};

use super::args::{Cli, Commands};
use super::config::PersistentConfig;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Commands::Repl { words } => {
            let config = PersistentConfig::load_from(config_path.as_deref())?;
            let overrides = PersistentConfig {
                word_list: words,
                ..empty_overrides()
            };
            let config = config.merge_with_cli(&overrides);
            let words = load_configured_word_list(&config)?;
            let harness = BenchmarkHarness::with_options(words, config.benchmark_options());
            crate::repl::run(harness)
        }
        Commands::Suggest {
            probe,
            words,
            max_length_difference,
            json,
        } => {
            let overrides = PersistentConfig {
                word_list: words,
                max_length_difference,
                ..empty_overrides()
            };
            cmd_suggest(&probe, config_path.as_deref(), &overrides, json)
        }
        Commands::Distance {
            source,
            target,
            variant,
        } => cmd_distance(&source, &target, variant),
        Commands::Bench {
            probe,
            words,
            order,
            pause_ms,
            recursive_cutoff,
            max_length_difference,
            json,
        } => {
            let overrides = PersistentConfig {
                word_list: words,
                max_length_difference,
                recursive_cutoff,
                yield_pause_ms: pause_ms,
                phase_order: order,
            };
            cmd_bench(&probe, config_path.as_deref(), &overrides, json)
        }
        Commands::Settings {
            set_words,
            set_max_length_difference,
            set_recursive_cutoff,
            set_pause_ms,
            set_order,
            reset,
        } => {
            let updates = PersistentConfig {
                word_list: set_words,
                max_length_difference: set_max_length_difference,
                recursive_cutoff: set_recursive_cutoff,
                yield_pause_ms: set_pause_ms,
                phase_order: set_order,
            };
            cmd_settings(config_path.as_deref(), &updates, reset)
        }
    }
}

/// Overrides with every field unset
fn empty_overrides() -> PersistentConfig {
    PersistentConfig {
        word_list: None,
        max_length_difference: None,
        recursive_cutoff: None,
        yield_pause_ms: None,
        phase_order: None,
    }
}

/// Load a word list file: one word per line, each trimmed, blank lines
/// skipped. Every other line is a word, including ones starting with `#`.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open word list: {}", path.display()))?;

    let words = WordList::parse(&text);
    if words.is_empty() {
        bail!("Word list is empty: {}", path.display());
    }

    tracing::info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

fn load_configured_word_list(config: &PersistentConfig) -> Result<WordList> {
    let path: &PathBuf = config.word_list.as_ref().context(
        "No word list given. Pass --words <file> or set one with `nearword settings --set-words <file>`",
    )?;
    load_word_list(path)
}

/// Trim and lower-case a probe, rejecting empty input
pub fn normalize_probe(probe: &str) -> Result<String> {
    let normalized = probe.trim().to_lowercase();
    if normalized.is_empty() {
        bail!("Type a word first: the probe is empty");
    }
    Ok(normalized)
}

/// Suggest command
fn cmd_suggest(
    probe: &str,
    config_path: Option<&Path>,
    overrides: &PersistentConfig,
    json: bool,
) -> Result<()> {
    let probe = normalize_probe(probe)?;
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(overrides);
    let words = load_configured_word_list(&config)?;
    let harness = BenchmarkHarness::with_options(words, config.benchmark_options());

    let report = harness.suggest(&probe);
    if json {
        let mut sink = JsonSink::new(std::io::stdout().lock());
        sink.suggestion(&probe, &report);
        sink.finish()?;
    } else {
        TerminalSink::new(harness.options().recursive_cutoff).suggestion(&probe, &report);
    }

    Ok(())
}

/// Distance command
fn cmd_distance(source: &str, target: &str, variant: DistanceVariant) -> Result<()> {
    if let Some(cutoff) = variant.length_cutoff() {
        let longest = source.chars().count().max(target.chars().count());
        if longest > cutoff {
            eprintln!(
                "{}: {} distance on {} characters may take a very long time",
                "Warning".yellow(),
                variant,
                longest
            );
        }
    }

    println!("{}", variant.distance(source, target));
    Ok(())
}

/// Benchmark command
fn cmd_bench(
    probe: &str,
    config_path: Option<&Path>,
    overrides: &PersistentConfig,
    json: bool,
) -> Result<()> {
    let probe = normalize_probe(probe)?;
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(overrides);
    let words = load_configured_word_list(&config)?;
    let harness = BenchmarkHarness::with_options(words, config.benchmark_options());

    if !json {
        eprintln!(
            "Running benchmark over {} prefix(es) of {}...",
            probe.chars().count(),
            probe.cyan()
        );
    }

    let report = harness.run(&probe)?;

    if json {
        let mut sink = JsonSink::new(std::io::stdout().lock());
        sink.benchmark(&report);
        sink.finish()?;
    } else {
        TerminalSink::new(harness.options().recursive_cutoff).benchmark(&report);
    }

    Ok(())
}

/// Settings command
fn cmd_settings(config_path: Option<&Path>, updates: &PersistentConfig, reset: bool) -> Result<()> {
    let current = if reset {
        PersistentConfig::default()
    } else {
        PersistentConfig::load_from(config_path)?
    };

    let changed = reset || *updates != empty_overrides();
    let config = current.merge_with_cli(updates);

    if changed {
        let path = config.save_to(config_path)?;
        println!("{} {}", "Saved settings to".green(), path.display());
        println!();
    }

    print_settings(&config);
    Ok(())
}

fn print_settings(config: &PersistentConfig) {
    let options = config.benchmark_options();

    println!("{}", "Settings".bold().underline());
    println!();
    println!(
        "  Word list:             {}",
        config
            .word_list
            .as_ref()
            .map(|p| p.display().to_string().cyan())
            .unwrap_or_else(|| "(not set)".dimmed())
    );
    println!(
        "  Max length difference: {}",
        options.search.max_length_difference.to_string().green()
    );
    println!(
        "  Recursive cutoff:      {}",
        options.recursive_cutoff.to_string().green()
    );
    println!(
        "  Yield pause:           {} ms",
        options.yield_pause.as_millis().to_string().green()
    );
    println!(
        "  Phase order:           {}",
        options.phase_order.to_string().green()
    );
}

/// Human-readable result output
pub struct TerminalSink {
    recursive_cutoff: usize,
}

impl TerminalSink {
    /// Sink that mentions `recursive_cutoff` when a recursive run is skipped
    pub fn new(recursive_cutoff: usize) -> Self {
        Self { recursive_cutoff }
    }
}

/// Format a best-match outcome as a single line
pub fn format_outcome(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Found { word, distance } => {
            format!("{} (distance: {})", word.green().bold(), distance)
        }
        MatchOutcome::NoCandidate => "No candidate found".yellow().to_string(),
    }
}

/// Format a suggestion with both scan times (two decimals)
pub fn format_suggestion(report: &SuggestionReport, recursive_cutoff: usize) -> String {
    let recursive = match report.recursive_ms {
        Some(ms) => format!("{:.2} ms", ms),
        None => format!("skipped (> {} chars)", recursive_cutoff)
            .dimmed()
            .to_string(),
    };

    format!(
        "{}\n  Iterative time: {:.2} ms\n  Recursive time: {}",
        format_outcome(&report.outcome),
        report.iterative_ms,
        recursive
    )
}

/// Format a benchmark report as an aligned table (four decimals)
pub fn format_benchmark(report: &BenchmarkReport) -> String {
    let mut output = format!(
        "{:>4}  {:>14}  {:>14}\n",
        "n".bold(),
        report.recursive.label().red().bold(),
        report.iterative.label().green().bold()
    );

    for (len, recursive, iterative) in report.rows() {
        let cell = |value: Option<f64>| match value {
            Some(ms) => format!("{:.4} ms", ms),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:>4}  {:>14}  {:>14}\n",
            len,
            cell(recursive),
            cell(iterative)
        ));
    }

    output
}

impl ResultSink for TerminalSink {
    fn match_found(&mut self, _probe: &str, outcome: &MatchOutcome) {
        println!("{}", format_outcome(outcome));
    }

    fn suggestion(&mut self, _probe: &str, report: &SuggestionReport) {
        println!("{}", format_suggestion(report, self.recursive_cutoff));
    }

    fn benchmark(&mut self, report: &BenchmarkReport) {
        print!("{}", format_benchmark(report));
        if report.probe_len > self.recursive_cutoff {
            println!();
            println!(
                "{}",
                format!(
                    "Recursive runs stop at n = {} to bound exponential runtime",
                    self.recursive_cutoff
                )
                .dimmed()
            );
        }
    }
}
