use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;
use crate::game::{RoundGenerator, MAX_STACK_LEN};

/// Longest game the config accepts, one day.
pub const MAX_ROUND_DURATION_SECS: f64 = 86_400.0;
/// Tallest target stack the config accepts.
pub const MAX_CONFIG_STACK_LEN: usize = 20;

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of one game in seconds.
    pub round_duration_secs: f64,
    /// Shortest target stack.
    pub min_stack_len: usize,
    /// Tallest target stack.
    pub max_stack_len: usize,
    /// Frames per second the terminal is redrawn at.
    pub frame_rate: u32,
    /// Where the high score is kept.
    pub high_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            round_duration_secs: 60.0,
            min_stack_len: 1,
            max_stack_len: MAX_STACK_LEN,
            frame_rate: 60,
            high_score_path: PathBuf::from("high_score.json"),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.round_duration_secs.is_finite() && self.round_duration_secs > 0.0) {
            return Err(ConfigError::Validation(
                "round_duration_secs must be > 0".into(),
            ));
        }
        if self.round_duration_secs > MAX_ROUND_DURATION_SECS {
            return Err(ConfigError::Validation(format!(
                "round_duration_secs must be <= {MAX_ROUND_DURATION_SECS}"
            )));
        }
        if self.min_stack_len == 0 {
            return Err(ConfigError::Validation(
                "min_stack_len must be >= 1".into(),
            ));
        }
        if self.max_stack_len < self.min_stack_len {
            return Err(ConfigError::Validation(
                "max_stack_len must be >= min_stack_len".into(),
            ));
        }
        if self.max_stack_len > MAX_CONFIG_STACK_LEN {
            return Err(ConfigError::Validation(format!(
                "max_stack_len must be <= {MAX_CONFIG_STACK_LEN}"
            )));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Validation("frame_rate must be > 0".into()));
        }
        Ok(())
    }

    /// Game length, clamped to what `validate` accepts.
    pub fn round_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.round_duration_secs.min(MAX_ROUND_DURATION_SECS))
            .unwrap_or(Duration::ZERO)
    }

    /// Time budget for a single frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Build a round generator for the configured heights, seeded from the OS
    /// unless a seed is given.
    pub fn generator(&self, seed: Option<u64>) -> RoundGenerator {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RoundGenerator::with_rng(rng, self.min_stack_len, self.max_stack_len)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
