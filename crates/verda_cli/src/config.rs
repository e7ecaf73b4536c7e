//! Verda configuration file handling (verda.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::formats::Platform;

/// Top-level Verda configuration (verda.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VerdaConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Project metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_name() -> String {
    "verda".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
        }
    }
}

/// Token build configuration, one output per platform
#[derive(Debug, Deserialize, Serialize)]
pub struct TokensConfig {
    #[serde(default = "default_css")]
    pub css: PlatformConfig,
    #[serde(default = "default_scss")]
    pub scss: PlatformConfig,
    #[serde(default = "default_js")]
    pub js: PlatformConfig,
    #[serde(default = "default_ts")]
    pub ts: PlatformConfig,
}

/// Per-platform output configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PlatformConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub output: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_css() -> PlatformConfig {
    PlatformConfig {
        enabled: true,
        output: PathBuf::from("dist/css/variables.css"),
    }
}

fn default_scss() -> PlatformConfig {
    PlatformConfig {
        enabled: true,
        output: PathBuf::from("dist/scss/_variables.scss"),
    }
}

fn default_js() -> PlatformConfig {
    PlatformConfig {
        enabled: true,
        output: PathBuf::from("dist/js/tokens.js"),
    }
}

fn default_ts() -> PlatformConfig {
    PlatformConfig {
        enabled: true,
        output: PathBuf::from("src/tokens.ts"),
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            css: default_css(),
            scss: default_scss(),
            js: default_js(),
            ts: default_ts(),
        }
    }
}

impl TokensConfig {
    /// Output configuration for a platform
    pub fn platform(&self, platform: Platform) -> &PlatformConfig {
        match platform {
            Platform::Css => &self.css,
            Platform::Scss => &self.scss,
            Platform::Js => &self.js,
            Platform::Ts => &self.ts,
        }
    }
}

impl VerdaConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
