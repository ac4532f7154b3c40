//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if it exists)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for rendering and generation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Seed sources registered on every invocation.
    pub seeds: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Environment used by `render` when `--env` is absent.
    pub env: String,
    /// Language used by `generate` when `--lang` is absent.
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed files loaded before every command that touches the registry.
    pub files: Vec<PathBuf>,
    /// Directory of seed files, walked recursively.
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            output: OutputConfig::default(),
            seeds: SeedConfig::default(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            env: "dev".into(),
            language: "TypeScript".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { no_color: false }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(explicit) => (explicit.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        let config = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.appforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "appforge", "appforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".appforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_env_is_dev() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.env, "dev");
        assert_eq!(cfg.defaults.language, "TypeScript");
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert!(!cfg.output.no_color);
        assert!(cfg.seeds.files.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nenv = \"production\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.env, "production");
        // Unspecified sections keep their defaults.
        assert_eq!(cfg.defaults.language, "TypeScript");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
