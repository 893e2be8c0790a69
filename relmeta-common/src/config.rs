//! Configuration loading and config file resolution
//!
//! Config file resolution follows this priority order:
//! 1. Explicit path (command-line argument)
//! 2. Environment variable `RELMETA_CONFIG`
//! 3. Platform config file (`<config_dir>/relmeta/config.toml`)
//! 4. Compiled defaults
//!
//! A missing platform file is not an error; an explicitly requested file
//! that is missing or malformed is. A platform file that exists but cannot
//! be used falls back to the defaults and is reported as
//! [`ConfigSource::UnusablePlatformFile`], so callers that install logging
//! after loading can still tell the user.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "RELMETA_CONFIG";

/// Weights of the release identity sub-scores
///
/// A weight of zero disables its sub-score entirely. The track list
/// weight is `track` multiplied by the number of paired tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Catalog number comparison
    pub publishing: f64,
    /// Release title similarity
    pub title: f64,
    /// Best performer name match
    pub performers: f64,
    /// Per-track title similarity
    pub track: f64,
    /// Disc medium equality
    pub disc_format: f64,
}

impl ScoringWeights {
    pub const DEFAULT_PUBLISHING: f64 = 1.0;
    pub const DEFAULT_TITLE: f64 = 5.0;
    pub const DEFAULT_PERFORMERS: f64 = 5.0;
    pub const DEFAULT_TRACK: f64 = 1.0;
    pub const DEFAULT_DISC_FORMAT: f64 = 1.0;

    /// Reject negative or non-finite weights
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("publishing", self.publishing),
            ("title", self.title),
            ("performers", self.performers),
            ("track", self.track),
            ("disc_format", self.disc_format),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "scoring weight '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            publishing: Self::DEFAULT_PUBLISHING,
            title: Self::DEFAULT_TITLE,
            performers: Self::DEFAULT_PERFORMERS,
            track: Self::DEFAULT_TRACK,
            disc_format: Self::DEFAULT_DISC_FORMAT,
        }
    }
}

/// Candidate ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of best candidates kept when the caller gives none
    #[serde(default = "default_ranking_count")]
    pub default_count: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_count: default_ranking_count(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_ranking_count() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration loaded from TOML file
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

/// Where a resolved configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine(PathBuf),
    Environment(PathBuf),
    PlatformFile(PathBuf),
    /// Platform file exists but failed to load; defaults are in effect
    UnusablePlatformFile { path: PathBuf, reason: String },
    Defaults,
}

/// Resolves and loads the configuration following the priority order
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create resolver; `cli_path` is the `--config` argument if any
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Determine which config source applies
    pub fn resolve_source(&self) -> ConfigSource {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return ConfigSource::CommandLine(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return ConfigSource::Environment(PathBuf::from(path));
            }
        }

        // Priority 3: Platform config file
        if let Some(path) = platform_config_file() {
            if path.exists() {
                return ConfigSource::PlatformFile(path);
            }
        }

        // Priority 4: Compiled defaults
        ConfigSource::Defaults
    }

    /// Load the configuration from the resolved source
    ///
    /// The returned source is `UnusablePlatformFile` when the platform file
    /// was rejected and the defaults were used instead.
    pub fn load(&self) -> Result<(TomlConfig, ConfigSource)> {
        let source = self.resolve_source();
        match source {
            ConfigSource::CommandLine(ref path) | ConfigSource::Environment(ref path) => {
                info!("Loading config from {}", path.display());
                let config = TomlConfig::load(path)?;
                Ok((config, source))
            }
            ConfigSource::PlatformFile(path) => match TomlConfig::load(&path) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    Ok((config, ConfigSource::PlatformFile(path)))
                }
                Err(e) => {
                    warn!("Ignoring unusable config file: {} (using defaults)", e);
                    let source = ConfigSource::UnusablePlatformFile {
                        path,
                        reason: e.to_string(),
                    };
                    Ok((TomlConfig::default(), source))
                }
            },
            ConfigSource::UnusablePlatformFile { .. } | ConfigSource::Defaults => {
                debug!("No config file found, using compiled defaults");
                Ok((TomlConfig::default(), ConfigSource::Defaults))
            }
        }
    }
}

/// Platform config file path (`~/.config/relmeta/config.toml` on Linux)
pub fn platform_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("relmeta").join("config.toml"))
}
