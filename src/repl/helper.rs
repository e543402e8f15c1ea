//! Rustyline helper integration
//!
//! Provides command completion and a live "closest word" hint for the REPL.

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;

use crate::benchmark::BenchmarkHarness;
use crate::distance::DistanceVariant;
use crate::search::{CandidateSearch, MatchOutcome};

const COMMANDS: [&str; 6] = [":bench", ":distance", ":stats", ":help", ":quit", ":exit"];

/// Inline hint showing the closest word; never inserted into the line.
#[derive(Debug, Clone)]
pub struct SuggestionHint {
    display: String,
}

impl Hint for SuggestionHint {
    fn display(&self) -> &str {
        &self.display
    }

    fn completion(&self) -> Option<&str> {
        None
    }
}

/// REPL helper
pub struct SuggestionHelper {
    search: CandidateSearch<DistanceVariant>,
    live_hints: bool,
}

impl SuggestionHelper {
    /// Create a helper that hints matches from `harness`'s word list
    pub fn new(harness: BenchmarkHarness, live_hints: bool) -> Self {
        Self {
            search: CandidateSearch::with_options(
                harness.words().clone(),
                DistanceVariant::Iterative,
                harness.options().search,
            ),
            live_hints,
        }
    }
}

impl Helper for SuggestionHelper {}

impl Completer for SuggestionHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        if !line.starts_with(':') || line.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let prefix = line.to_lowercase();
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for SuggestionHelper {
    type Hint = SuggestionHint;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        if !self.live_hints || pos < line.len() {
            return None;
        }

        let probe = line.trim().to_lowercase();
        if probe.is_empty() || probe.starts_with(':') {
            return None;
        }

        match self.search.best_match(&probe) {
            MatchOutcome::Found { word, distance } if distance > 0 => Some(SuggestionHint {
                display: format!("  → {} (d={})", word, distance),
            }),
            _ => None,
        }
    }
}

impl Highlighter for SuggestionHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for SuggestionHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
