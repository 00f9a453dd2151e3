// ABOUTME: Configuration file loading, validation, and hierarchical merging
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// Jira host used when neither --host nor JIRA_HOST is given.
    #[serde(default)]
    pub default_host: Option<String>,
    /// Result limit used when --limit is not given.
    #[serde(default)]
    pub default_limit: Option<u32>,
    /// Pager command; overrides $PAGER.
    #[serde(default)]
    pub pager: Option<String>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths in order of precedence
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            // Apply in order - later paths override earlier ones
            if Path::new(path).exists() {
                let file_config = Self::load_from_file(path)?;
                config = config.merge(file_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get standard config file paths in order of precedence (lowest first)
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir
                .join(".config")
                .join("jira-cli")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home)
                .join("jira-cli")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(
                current_dir
                    .join("jira-cli.toml")
                    .to_string_lossy()
                    .to_string(),
            );
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            default_host: other.default_host.or(self.default_host),
            default_limit: other.default_limit.or(self.default_limit),
            pager: other.pager.or(self.pager),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.default_limit {
            if limit == 0 {
                return Err(anyhow!("default_limit must be at least 1"));
            }
        }

        if let Some(ref host) = self.default_host {
            if host.trim().is_empty() {
                return Err(anyhow!("default_host must not be empty"));
            }
        }

        Ok(())
    }
}
