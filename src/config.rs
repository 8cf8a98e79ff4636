use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::alchemy::{RarityWeights, DEFAULT_MAX_ATTEMPTS, MAX_ROLL_COUNT};
use crate::core::session::{SessionOptions, DEFAULT_HISTORY_LIMIT};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub generation: GenerationConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Input poll interval in milliseconds.
    pub tick_rate_ms: u64,
}

/// Catalog locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub plants_path: PathBuf,
    pub animals_path: PathBuf,
}

/// Sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub weights: RarityWeights,
    /// Items per roll when the session starts.
    pub default_count: usize,
    pub max_attempts: u32,
    pub history_limit: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            plants_path: PathBuf::from("data/plants.yaml"),
            animals_path: PathBuf::from("data/animals.yaml"),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            weights: RarityWeights::default(),
            default_count: 1,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/apothecary/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &std::path::Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config.sanitized()
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults.
    fn sanitized(mut self) -> Self {
        if let Err(e) = self.generation.weights.validated() {
            log::warn!("{e}; using default rarity weights");
            self.generation.weights = RarityWeights::default();
        }
        self.generation.default_count = self.generation.default_count.clamp(1, MAX_ROLL_COUNT);
        if self.generation.max_attempts == 0 {
            log::warn!("max_attempts must be at least 1; using 1");
            self.generation.max_attempts = 1;
        }
        self.generation.history_limit = self.generation.history_limit.max(1);
        self
    }

    /// Session parameters derived from the generation section.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            weights: self.generation.weights,
            count: self.generation.default_count,
            max_attempts: self.generation.max_attempts,
            history_limit: self.generation.history_limit,
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("apothecary").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.generation.weights.common, 80);
        assert_eq!(config.generation.max_attempts, 100);
        assert_eq!(config.data.plants_path, PathBuf::from("data/plants.yaml"));
    }

    #[test]
    fn test_config_load_missing_file() {
        let config = AppConfig::load_from(std::path::Path::new("/nonexistent/config.toml"));
        assert_eq!(config.generation.default_count, 1);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AppConfig =
            toml::from_str("[generation.weights]\nlegendary = 3\n").unwrap();
        assert_eq!(config.generation.weights.legendary, 3);
        assert_eq!(config.generation.weights.common, 80);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_zero_weight_is_sanitized() {
        let config: AppConfig = toml::from_str("[generation.weights]\nrare = 0\n").unwrap();
        let config = config.sanitized();
        assert_eq!(config.generation.weights, RarityWeights::default());
    }

    #[test]
    fn test_default_count_is_clamped() {
        let config: AppConfig = toml::from_str("[generation]\ndefault_count = 50\n").unwrap();
        assert_eq!(config.sanitized().generation.default_count, MAX_ROLL_COUNT);
    }

    #[test]
    fn test_zero_bounds_are_raised() {
        let config: AppConfig =
            toml::from_str("[generation]\nmax_attempts = 0\nhistory_limit = 0\n").unwrap();
        let options = config.sanitized().session_options();
        assert_eq!(options.max_attempts, 1);
        assert_eq!(options.history_limit, 1);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.generation.weights, config.generation.weights);
    }
}
