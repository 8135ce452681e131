//! Configuration loaded from `fragmap.toml`.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "fragmap.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmapConfig {
    /// Fallback pattern catalog settings
    #[serde(default)]
    pub patterns: PatternConfig,

    /// Input size limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Default pattern catalog file, used when the CLI passes none
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Bounds on the per-invocation fragments × candidates product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of noise fragments per upload
    #[serde(default = "default_max_fragments")]
    pub max_fragments: usize,

    /// Maximum number of candidate classes across all pools
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

fn default_max_fragments() -> usize {
    10_000
}

fn default_max_candidates() -> usize {
    10_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_fragments: default_max_fragments(),
            max_candidates: default_max_candidates(),
        }
    }
}

impl FragmapConfig {
    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: FragmapConfig = toml::from_str(&raw).map_err(|e| {
            Error::Configuration(format!("failed to parse {}: {e}", path.display()))
        })?;
        config.validate().map_err(Error::Configuration)?;
        Ok(config)
    }

    /// Load `fragmap.toml` from the working directory, or defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    // Pure function: Check limits are usable
    fn validate(&self) -> std::result::Result<(), String> {
        if self.limits.max_fragments == 0 {
            return Err("limits.max_fragments must be greater than 0".to_string());
        }
        if self.limits.max_candidates == 0 {
            return Err("limits.max_candidates must be greater than 0".to_string());
        }
        Ok(())
    }
}

static CONFIG: OnceLock<FragmapConfig> = OnceLock::new();

/// Get the cached configuration, falling back to defaults (with a warning)
/// when the file is invalid.
pub fn get_config() -> &'static FragmapConfig {
    CONFIG.get_or_init(|| match FragmapConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("configuration error: {e}; using defaults");
            FragmapConfig::default()
        }
    })
}

/// Starter configuration written by `fragmap init`.
pub fn default_config_template() -> &'static str {
    r#"# Fragmap Configuration

[patterns]
# Fallback pattern catalog, consulted when a cluster pool yields nothing.
# file = "patterns.json"

[limits]
max_fragments = 10000
max_candidates = 10000
"#
}
