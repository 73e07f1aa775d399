//! Configuration system: TOML file + env var overrides + smart defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{CompareError, Result};

/// Widest fixed precision accepted for printed percentages.
pub const MAX_PERCENT_DECIMALS: usize = 17;

/// Full clar_compare configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

/// Where the two score files live and how they are named.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding the known-optimal score files.
    pub known_dir: PathBuf,
    /// Suffix appended to `{n:03}_{p:02}_` for the known file.
    pub known_suffix: String,
    /// Directory holding the computed score files.
    pub computed_dir: PathBuf,
    /// Suffix appended to `{n:03}_{p:02}_` for the computed file.
    pub computed_suffix: String,
}

/// Report rendering and exit behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Fixed decimals for percentages; `None` prints shortest round-trip form.
    pub percent_decimals: Option<usize>,
    /// Exit non-zero when an input file is missing.
    pub strict_exit: bool,
}

/// JSONL run-log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub jsonl_log: PathBuf,
    pub max_size_bytes: u64,
    pub max_rotated_files: u32,
}

/// Filesystem paths used by clar_compare itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            known_dir: PathBuf::from("../../gen_output"),
            known_suffix: "anc_#".to_string(),
            computed_dir: PathBuf::from("output"),
            computed_suffix: "anionic_clar_num".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let data = home_dir().join(".local").join("share").join("clar-compare");
        Self {
            enabled: true,
            jsonl_log: data.join("runs.jsonl"),
            max_size_bytes: 10 * 1024 * 1024,
            max_rotated_files: 3,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config_file: home_dir()
                .join(".config")
                .join("clar-compare")
                .join("config.toml"),
        }
    }
}

fn home_dir() -> PathBuf {
    env::var_os("HOME").map_or_else(
        || {
            eprintln!("[CLR-CONFIG] WARNING: HOME not set, falling back to /tmp for data paths");
            PathBuf::from("/tmp")
        },
        PathBuf::from,
    )
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| CompareError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(CompareError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides_from(env_var)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Deterministic hash of the effective config for the run log.
    ///
    /// FNV-1a over the canonical JSON form, stable across processes.
    pub fn stable_hash(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in canonical.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Ok(format!("{hash:016x}"))
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        // layout
        if let Some(raw) = lookup("CLAR_KNOWN_DIR") {
            self.layout.known_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("CLAR_KNOWN_SUFFIX") {
            self.layout.known_suffix = raw;
        }
        if let Some(raw) = lookup("CLAR_COMPUTED_DIR") {
            self.layout.computed_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("CLAR_COMPUTED_SUFFIX") {
            self.layout.computed_suffix = raw;
        }

        // report
        if let Some(raw) = lookup("CLAR_PERCENT_DECIMALS") {
            self.report.percent_decimals = Some(parse_env_usize("CLAR_PERCENT_DECIMALS", &raw)?);
        }
        if let Some(raw) = lookup("CLAR_STRICT_EXIT") {
            self.report.strict_exit = parse_env_bool("CLAR_STRICT_EXIT", &raw)?;
        }

        // logging
        if let Some(raw) = lookup("CLAR_LOG_ENABLED") {
            self.logging.enabled = parse_env_bool("CLAR_LOG_ENABLED", &raw)?;
        }
        if let Some(raw) = lookup("CLAR_LOG_PATH") {
            self.logging.jsonl_log = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("CLAR_LOG_MAX_SIZE_BYTES") {
            self.logging.max_size_bytes = parse_env_u64("CLAR_LOG_MAX_SIZE_BYTES", &raw)?;
        }

        Ok(())
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        for (name, val) in [
            ("known_suffix", &self.layout.known_suffix),
            ("computed_suffix", &self.layout.computed_suffix),
        ] {
            if val.trim().is_empty() {
                return Err(CompareError::InvalidConfig {
                    details: format!("layout.{name} must not be empty"),
                });
            }
        }

        if let Some(decimals) = self.report.percent_decimals
            && decimals > MAX_PERCENT_DECIMALS
        {
            return Err(CompareError::InvalidConfig {
                details: format!(
                    "report.percent_decimals must be <= {MAX_PERCENT_DECIMALS}, got {decimals}"
                ),
            });
        }

        if self.logging.max_size_bytes == 0 {
            return Err(CompareError::InvalidConfig {
                details: "logging.max_size_bytes must be > 0".to_string(),
            });
        }
        if self.logging.max_rotated_files == 0 {
            return Err(CompareError::InvalidConfig {
                details: "logging.max_rotated_files must be >= 1".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|error| CompareError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}

fn parse_env_usize(name: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|error| CompareError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.trim()
        .parse::<bool>()
        .map_err(|error| CompareError::ConfigParse {
            context: "env",
            details: format!("{name}={raw:?}: {error}"),
        })
}
