//! Configuration directory and persistent user settings

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::benchmark::{BenchmarkOptions, PhaseOrder};
use crate::distance::RECURSIVE_LENGTH_CUTOFF;
use crate::search::{SearchOptions, DEFAULT_MAX_LENGTH_DIFFERENCE};

/// Get the configuration directory for nearword
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("nearword"))
}

/// Get the config file path, honoring an explicit override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config_dir()?.join("config.json")),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default word list path (if set by user)
    pub word_list: Option<PathBuf>,
    /// Pruning bound for the candidate scan
    pub max_length_difference: Option<usize>,
    /// Longest prefix benchmarked with the recursive variant
    pub recursive_cutoff: Option<usize>,
    /// Pause between timed benchmark runs, in milliseconds
    pub yield_pause_ms: Option<u64>,
    /// Which benchmark phase runs first
    pub phase_order: Option<PhaseOrder>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path(custom_path)?;
        validate_config_path(&path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, overrides: &PersistentConfig) -> Self {
        Self {
            word_list: overrides
                .word_list
                .clone()
                .or_else(|| self.word_list.clone()),
            max_length_difference: overrides
                .max_length_difference
                .or(self.max_length_difference),
            recursive_cutoff: overrides.recursive_cutoff.or(self.recursive_cutoff),
            yield_pause_ms: overrides.yield_pause_ms.or(self.yield_pause_ms),
            phase_order: overrides.phase_order.or(self.phase_order),
        }
    }

    /// Search options described by this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_length_difference: self
                .max_length_difference
                .unwrap_or(DEFAULT_MAX_LENGTH_DIFFERENCE),
        }
    }

    /// Benchmark options described by this configuration
    pub fn benchmark_options(&self) -> BenchmarkOptions {
        let defaults = BenchmarkOptions::default();
        BenchmarkOptions {
            recursive_cutoff: self.recursive_cutoff.unwrap_or(defaults.recursive_cutoff),
            yield_pause: self
                .yield_pause_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.yield_pause),
            phase_order: self.phase_order.unwrap_or(defaults.phase_order),
            search: self.search_options(),
        }
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            max_length_difference: Some(DEFAULT_MAX_LENGTH_DIFFERENCE),
            recursive_cutoff: Some(RECURSIVE_LENGTH_CUTOFF),
            yield_pause_ms: Some(10),
            phase_order: Some(PhaseOrder::RecursiveFirst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = PersistentConfig::default();
        assert_eq!(config.benchmark_options(), BenchmarkOptions::default());
    }

    #[test]
    fn test_merge_prefers_cli() {
        let base = PersistentConfig {
            word_list: Some(PathBuf::from("base.lst")),
            ..PersistentConfig::default()
        };
        let overrides = PersistentConfig {
            word_list: None,
            max_length_difference: Some(1),
            recursive_cutoff: None,
            yield_pause_ms: Some(0),
            phase_order: Some(PhaseOrder::IterativeFirst),
        };

        let merged = base.merge_with_cli(&overrides);
        assert_eq!(merged.word_list, Some(PathBuf::from("base.lst")));
        assert_eq!(merged.max_length_difference, Some(1));
        assert_eq!(merged.recursive_cutoff, Some(8));

        let options = merged.benchmark_options();
        assert_eq!(options.yield_pause, Duration::ZERO);
        assert_eq!(options.phase_order, PhaseOrder::IterativeFirst);
        assert_eq!(options.search.max_length_difference, 1);
    }

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("a/config.json")).is_ok());
        assert!(validate_config_path(Path::new("a/config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
    }
}
