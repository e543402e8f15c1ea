//! Interactive suggestion loop for nearword
//!
//! Every plain line is looked up as a probe; lines starting with `:` are
//! commands (`:bench`, `:distance`, `:help`, `:quit`). While typing, the
//! closest word is shown as an inline hint.

pub mod command;
pub mod helper;

pub use command::{Command, CommandResult};
pub use helper::SuggestionHelper;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::benchmark::BenchmarkHarness;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Show the closest word as an inline hint while typing
    pub live_hints: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "nearword> ".to_string(),
            history_file: dirs::home_dir().map(|home| home.join(".nearword_history")),
            live_hints: true,
        }
    }
}

/// Run the REPL until `:quit` or end of input
pub fn run(harness: BenchmarkHarness) -> Result<()> {
    run_with_config(harness, ReplConfig::default())
}

/// Run the REPL with explicit configuration
pub fn run_with_config(harness: BenchmarkHarness, config: ReplConfig) -> Result<()> {
    print_banner(&harness);

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let helper = SuggestionHelper::new(harness.clone(), config.live_hints);
    let mut editor: Editor<SuggestionHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(helper));

    if let Some(history_path) = &config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        let line = match editor.readline(&config.prompt.bright_cyan().bold().to_string()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                continue;
            }
        };

        match command.execute(&harness) {
            Ok(CommandResult::Continue(output)) => println!("{}", output),
            Ok(CommandResult::Exit) => break,
            Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
        }
    }

    if let Some(history_path) = &config.history_file {
        if let Err(e) = editor.save_history(history_path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }

    Ok(())
}

fn print_banner(harness: &BenchmarkHarness) {
    println!();
    println!("{}", "   nearword - nearest-word lookup".bright_cyan().bold());
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!(
        "  Type a word to get a suggestion, {} for commands, {} to exit",
        "':help'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!(
        "  Recursive timing is skipped above {} characters",
        harness.options().recursive_cutoff.to_string().yellow()
    );
    println!();
}
