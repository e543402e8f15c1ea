//! Command parsing and execution
//!
//! Plain input is a probe. Commands start with `:`.

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::benchmark::BenchmarkHarness;
use crate::cli::commands::{format_benchmark, format_suggestion, normalize_probe};
use crate::distance::{DistanceMetric, DistanceVariant};

/// REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Suggest the closest word: <probe>
    Suggest {
        /// Normalized probe
        probe: String,
    },
    /// Run the prefix-sweep benchmark: :bench <probe>
    Bench {
        /// Normalized probe
        probe: String,
    },
    /// Compute a distance: :distance <a> <b> [recursive|iterative]
    Distance {
        /// First string
        source: String,
        /// Second string
        target: String,
        /// Distance implementation
        variant: DistanceVariant,
    },
    /// Show word list statistics: :stats
    Stats,
    /// Show help: :help
    Help,
    /// Exit REPL: :quit | :exit
    Exit,
}

/// Command result
#[derive(Debug)]
pub enum CommandResult {
    /// Continue REPL, printing the output
    Continue(String),
    /// Exit REPL
    Exit,
}

impl Command {
    /// Parse command from input string.
    ///
    /// Blank input parses to `None`.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let Some(rest) = input.strip_prefix(':') else {
            return Ok(Some(Self::Suggest {
                probe: normalize_probe(input)?,
            }));
        };

        let parts: Vec<&str> = rest.split_whitespace().collect();
        let Some(cmd) = parts.first().map(|c| c.to_lowercase()) else {
            return Err(anyhow!("Empty command. Type ':help' for available commands."));
        };

        let command = match cmd.as_str() {
            "bench" | "b" => {
                if parts.len() < 2 {
                    return Err(anyhow!("Usage: :bench <probe>"));
                }
                Self::Bench {
                    probe: normalize_probe(&parts[1..].join(" "))?,
                }
            }
            "distance" | "dist" | "d" => Self::parse_distance(&parts[1..])?,
            "stats" | "info" => Self::Stats,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Exit,
            _ => {
                return Err(anyhow!(
                    "Unknown command: ':{}'. Type ':help' for available commands.",
                    cmd
                ))
            }
        };

        Ok(Some(command))
    }

    fn parse_distance(args: &[&str]) -> Result<Self> {
        match args {
            [source, target] => Ok(Self::Distance {
                source: source.to_string(),
                target: target.to_string(),
                variant: DistanceVariant::Iterative,
            }),
            [source, target, variant] => Ok(Self::Distance {
                source: source.to_string(),
                target: target.to_string(),
                variant: variant.parse().map_err(|e: String| anyhow!(e))?,
            }),
            _ => Err(anyhow!("Usage: :distance <a> <b> [recursive|iterative]")),
        }
    }

    /// Execute the command against `harness`
    pub fn execute(&self, harness: &BenchmarkHarness) -> Result<CommandResult> {
        let cutoff = harness.options().recursive_cutoff;

        match self {
            Self::Suggest { probe } => {
                let report = harness.suggest(probe);
                Ok(CommandResult::Continue(format_suggestion(&report, cutoff)))
            }
            Self::Bench { probe } => {
                println!("{}", format!("Running benchmark for {}...", probe).dimmed());
                let report = harness.run(probe)?;
                Ok(CommandResult::Continue(format_benchmark(&report)))
            }
            Self::Distance {
                source,
                target,
                variant,
            } => {
                let longest = source.chars().count().max(target.chars().count());
                if let Some(limit) = variant.length_cutoff().filter(|&limit| longest > limit) {
                    return Err(anyhow!(
                        "{} distance is limited to {} characters in the REPL",
                        variant,
                        limit
                    ));
                }
                Ok(CommandResult::Continue(
                    variant.distance(source, target).to_string(),
                ))
            }
            Self::Stats => {
                let words = harness.words();
                let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
                Ok(CommandResult::Continue(format!(
                    "  Words:        {}\n  Longest word: {} chars\n  Prune bound:  ±{}",
                    words.len().to_string().green(),
                    longest,
                    harness.options().search.max_length_difference
                )))
            }
            Self::Help => Ok(CommandResult::Continue(general_help())),
            Self::Exit => Ok(CommandResult::Exit),
        }
    }
}

fn general_help() -> String {
    format!(
        r#"{}

  <word>                         Suggest the closest word
  :bench, :b <word>              Time both variants over every prefix
  :distance, :d <a> <b> [variant]
                                 Edit distance (iterative by default)
  :stats                         Word list statistics
  :help, :?                      Show this help
  :quit, :exit                   Leave the REPL"#,
        "Commands".bold().underline()
    )
}
