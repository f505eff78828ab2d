//! Game configuration
//!
//! Loaded from a RON file, with fallback to built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Timings;
use crate::render::GlyphMode;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "HEARTMATCH_CONFIG";

const CONFIG_FILE: &str = "heartmatch.ron";

const DEFAULT_WIN_MESSAGE: &str = "🥳🥳 Yay! You've matched all the hearts! Happy Valentine!❤️";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Delay before a mismatched pair is hidden again
    pub mismatch_delay_ms: u64,
    /// Delay between the final match and the win notification
    pub win_delay_ms: u64,
    /// Elapsed-time tick interval
    pub tick_interval_ms: u64,
    /// Cards per row on the board
    pub columns: u16,
    /// Fixed shuffle seed, for reproducible boards
    pub seed: Option<u64>,
    /// Force emoji or ASCII faces instead of detecting
    pub glyph_mode: Option<GlyphMode>,
    pub win_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mismatch_delay_ms: 1000,
            win_delay_ms: 600,
            tick_interval_ms: 1000,
            columns: 4,
            seed: None,
            glyph_mode: None,
            win_message: DEFAULT_WIN_MESSAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Load the config from the usual location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mismatch_delay_ms == 0 || self.win_delay_ms == 0 {
            return Err(ConfigError::Invalid("delays must be positive".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick interval must be positive".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Invalid("columns must be positive".into()));
        }
        Ok(())
    }

    /// Delays for the game controller
    pub fn timings(&self) -> Timings {
        Timings {
            mismatch_delay: Duration::from_millis(self.mismatch_delay_ms),
            win_delay: Duration::from_millis(self.win_delay_ms),
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }
}

/// Where the config file is looked up
pub fn config_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("com", "heartmatch", "Heartmatch")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_timings() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timings(), Timings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron_str("(mismatch_delay_ms: 250, seed: Some(9))").unwrap();
        assert_eq!(config.mismatch_delay_ms, 250);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.win_delay_ms, 600);
        assert_eq!(config.columns, 4);
    }

    #[test]
    fn test_glyph_mode_override() {
        let config = GameConfig::from_ron_str("(glyph_mode: Some(Ascii))").unwrap();
        assert_eq!(config.glyph_mode, Some(GlyphMode::Ascii));
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = GameConfig::from_ron_str("(columns: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed() {
        let err = GameConfig::from_ron_str("(columns: \"four\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = env::temp_dir().join("heartmatch-test-missing.ron");
        let _ = fs::remove_file(&path);
        let err = GameConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join("heartmatch-test-config.ron");
        fs::write(&path, "(columns: 6, win_message: \"done\")").unwrap();
        let config = GameConfig::load_from(&path).unwrap();
        assert_eq!(config.columns, 6);
        assert_eq!(config.win_message, "done");
        let _ = fs::remove_file(&path);
    }
}
