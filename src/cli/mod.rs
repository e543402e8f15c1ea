//! CLI interface for nearword
//!
//! Provides the `nearword` command-line utilities: one-off suggestions,
//! distance computation, prefix-sweep benchmarks, and persistent settings.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands};
pub use config::{config_dir, PersistentConfig};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output on stderr.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is set
/// or `verbose` is true; `verbose` without `RUST_LOG` enables
/// `nearword=debug`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("nearword=debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
